//! Pillar: a (stem, branch) pair naming one calendar unit.

use super::{Branch, Element, Stem};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Build from raw cyclic indices, wrapping each into range.
    pub fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    pub fn stem_element(&self) -> Element {
        self.stem.element()
    }

    pub fn branch_element(&self) -> Element {
        self.branch.element()
    }

    /// Position in the 60-step sexagenary cycle (甲子 = 0).
    ///
    /// Only pairs whose stem and branch share parity occur in the cycle; other
    /// pairs return `None`.
    pub fn cycle_index(&self) -> Option<usize> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as usize)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

/// The four pillars of a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Pillars {
    pub fn get(&self, kind: PillarKind) -> Pillar {
        match kind {
            PillarKind::Year => self.year,
            PillarKind::Month => self.month,
            PillarKind::Day => self.day,
            PillarKind::Hour => self.hour,
        }
    }
}
