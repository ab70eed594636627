//! The ten heavenly stems (tian gan).

use super::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const COUNT: usize = 10;

    pub const ALL: [Stem; Self::COUNT] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    const GLYPHS: [char; Self::COUNT] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

    /// Stem at a cyclic position; any integer wraps into `0..10`.
    pub fn from_index(index: i64) -> Stem {
        Self::ALL[index.rem_euclid(Self::COUNT as i64) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> char {
        Self::GLYPHS[self.index()]
    }

    pub fn from_glyph(c: char) -> Option<Stem> {
        Self::GLYPHS.iter().position(|&g| g == c).map(|i| Self::ALL[i])
    }

    /// Two consecutive stems per element, starting with wood.
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn pinyin(self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps_negative_and_large() {
        assert_eq!(Stem::from_index(0), Stem::Jia);
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(-11), Stem::Gui);
        assert_eq!(Stem::from_index(1_000_003), Stem::Ding);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
        for e in Element::ALL {
            assert_eq!(Stem::ALL.iter().filter(|s| s.element() == e).count(), 2);
        }
    }

    #[test]
    fn glyph_lookup_is_inverse() {
        for s in Stem::ALL {
            assert_eq!(Stem::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(Stem::from_glyph('子'), None);
    }
}
