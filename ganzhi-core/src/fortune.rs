//! Element relation engine: a binary fortune verdict for an asset's element
//! against a day pillar.
//!
//! Evaluation order:
//! 1. Start from [`FortuneRule::Default`] (unfavorable).
//! 2. The first matching entry of [`STEM_RULES`] replaces the verdict.
//! 3. [`FortuneRule::BranchMatch`] then overrides everything when the asset's
//!    element equals the branch element.
//!
//! A stem element that *generates* the asset's element has no rule of its own
//! and stays at the default.

use crate::calendar::{Element, Pillar};
use crate::pillars::day_pillar;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fortune {
    Favorable,
    Unfavorable,
}

impl Fortune {
    pub fn glyph(self) -> char {
        match self {
            Fortune::Favorable => '吉',
            Fortune::Unfavorable => '凶',
        }
    }

    pub fn is_favorable(self) -> bool {
        self == Fortune::Favorable
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fortune::Favorable => write!(f, "Favorable ({})", self.glyph()),
            Fortune::Unfavorable => write!(f, "Unfavorable ({})", self.glyph()),
        }
    }
}

/// Which rule produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneRule {
    Default,
    SameAsStem,
    GeneratesStem,
    DefeatsStem,
    DefeatedByStem,
    BranchMatch,
}

impl FortuneRule {
    pub fn describe(self) -> &'static str {
        match self {
            FortuneRule::Default => "no stem relation applies",
            FortuneRule::SameAsStem => "asset element equals the day stem element",
            FortuneRule::GeneratesStem => "asset element generates the day stem element",
            FortuneRule::DefeatsStem => "asset element defeats the day stem element",
            FortuneRule::DefeatedByStem => "day stem element defeats the asset element",
            FortuneRule::BranchMatch => "asset element equals the day branch element",
        }
    }
}

/// One row of the stem decision table.
#[derive(Debug, Clone, Copy)]
pub struct StemRule {
    pub rule: FortuneRule,
    pub verdict: Fortune,
    applies: fn(Element, Element) -> bool,
}

impl StemRule {
    /// Whether the rule fires for `(assigned, stem_element)`.
    pub fn applies(&self, assigned: Element, stem: Element) -> bool {
        (self.applies)(assigned, stem)
    }
}

fn same(assigned: Element, stem: Element) -> bool {
    assigned == stem
}

fn generates(assigned: Element, stem: Element) -> bool {
    assigned.generates() == stem
}

fn defeats(assigned: Element, stem: Element) -> bool {
    assigned.defeats() == stem
}

fn defeated_by(assigned: Element, stem: Element) -> bool {
    stem.defeats() == assigned
}

/// Stem rules in evaluation order; the first match wins.
pub const STEM_RULES: [StemRule; 4] = [
    StemRule { rule: FortuneRule::SameAsStem, verdict: Fortune::Favorable, applies: same },
    StemRule { rule: FortuneRule::GeneratesStem, verdict: Fortune::Favorable, applies: generates },
    StemRule { rule: FortuneRule::DefeatsStem, verdict: Fortune::Favorable, applies: defeats },
    StemRule { rule: FortuneRule::DefeatedByStem, verdict: Fortune::Unfavorable, applies: defeated_by },
];

const DEFAULT_VERDICT: Fortune = Fortune::Unfavorable;

/// A verdict together with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneReading {
    pub verdict: Fortune,
    pub rule: FortuneRule,
}

impl FortuneReading {
    /// Short phrase relating the asset to the day.
    pub fn summary(&self, assigned: Element) -> String {
        let relation = if self.verdict.is_favorable() {
            "is supported by"
        } else {
            "clashes with"
        };
        format!("Asset element ({assigned}) {relation} today's energy.")
    }
}

pub fn determine_fortune(assigned: Element, stem: Element, branch: Element) -> FortuneReading {
    let by_stem = STEM_RULES
        .iter()
        .find(|r| r.applies(assigned, stem))
        .map(|r| FortuneReading { verdict: r.verdict, rule: r.rule })
        .unwrap_or(FortuneReading { verdict: DEFAULT_VERDICT, rule: FortuneRule::Default });

    if assigned == branch {
        FortuneReading { verdict: Fortune::Favorable, rule: FortuneRule::BranchMatch }
    } else {
        by_stem
    }
}

/// Reading for an asset element against a day pillar.
pub fn reading_for_pillar(assigned: Element, day: Pillar) -> FortuneReading {
    determine_fortune(assigned, day.stem_element(), day.branch_element())
}

pub fn reading_for(assigned: Element, instant: NaiveDateTime) -> FortuneReading {
    reading_for_pillar(assigned, day_pillar(instant))
}

pub fn fortune_for(assigned: Element, instant: NaiveDateTime) -> Fortune {
    reading_for(assigned, instant).verdict
}
