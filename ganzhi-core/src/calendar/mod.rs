//! Calendar tables: stems, branches, elements, two-hour periods, pillars.
//!
//! All tables are compile-time constants. Every stem and branch has a
//! statically known element; the only fallible lookup is from free-form
//! glyph text arriving from outside the crate.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod stem;

pub use branch::{two_hour_period, Branch, TwoHourPeriod, TWO_HOUR_PERIODS};
pub use element::{Element, ParseElementError};
pub use pillar::{Pillar, PillarKind, Pillars};
pub use stem::Stem;

/// Element of a stem or branch glyph. `None` means "no annotation".
pub fn element_of_glyph(c: char) -> Option<Element> {
    Stem::from_glyph(c)
        .map(Stem::element)
        .or_else(|| Branch::from_glyph(c).map(Branch::element))
}
