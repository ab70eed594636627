//! Five elements and the two fixed relation cycles over them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five elements (wu xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// The element this one generates (wood → fire → earth → metal → water → wood).
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one defeats (wood → earth → water → fire → metal → wood).
    pub fn defeats(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Fire => Element::Metal,
            Element::Earth => Element::Water,
            Element::Metal => Element::Wood,
            Element::Water => Element::Fire,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }

    /// Overlay colour used when shading chart regions tagged with this element.
    pub fn color(self) -> &'static str {
        match self {
            Element::Wood => "#10b981",
            Element::Fire => "#f43f5e",
            Element::Earth => "#d97706",
            Element::Metal => "#eab308",
            Element::Water => "#3b82f6",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown element '{0}' (expected wood, fire, earth, metal or water)")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let by_name = match trimmed.to_ascii_lowercase().as_str() {
            "wood" => Some(Element::Wood),
            "fire" => Some(Element::Fire),
            "earth" => Some(Element::Earth),
            "metal" => Some(Element::Metal),
            "water" => Some(Element::Water),
            _ => None,
        };
        by_name
            .or_else(|| {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Element::ALL.into_iter().find(|e| e.glyph() == c),
                    _ => None,
                }
            })
            .ok_or_else(|| ParseElementError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_cycle_is_total_and_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn defeats_cycle_is_total_and_closes() {
        let mut e = Element::Fire;
        for _ in 0..5 {
            e = e.defeats();
        }
        assert_eq!(e, Element::Fire);
        assert_eq!(Element::Metal.defeats(), Element::Wood);
        assert_eq!(Element::Earth.defeats(), Element::Water);
    }

    #[test]
    fn no_element_generates_or_defeats_itself() {
        for e in Element::ALL {
            assert_ne!(e.generates(), e);
            assert_ne!(e.defeats(), e);
            assert_ne!(e.generates(), e.defeats());
        }
    }

    #[test]
    fn parses_names_and_glyphs() {
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("Metal".parse::<Element>().unwrap(), Element::Metal);
        assert_eq!("水".parse::<Element>().unwrap(), Element::Water);
        assert!("plasma".parse::<Element>().is_err());
        assert!("木火".parse::<Element>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Element::Earth).unwrap();
        assert_eq!(json, "\"earth\"");
    }
}
