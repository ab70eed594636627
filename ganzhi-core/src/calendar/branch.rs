//! The twelve earthly branches (di zhi) and the two-hour period table.

use super::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const COUNT: usize = 12;

    pub const ALL: [Branch; Self::COUNT] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    const GLYPHS: [char; Self::COUNT] = [
        '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
    ];

    /// Branch at a cyclic position; any integer wraps into `0..12`.
    pub fn from_index(index: i64) -> Branch {
        Self::ALL[index.rem_euclid(Self::COUNT as i64) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> char {
        Self::GLYPHS[self.index()]
    }

    pub fn from_glyph(c: char) -> Option<Branch> {
        Self::GLYPHS.iter().position(|&g| g == c).map(|i| Self::ALL[i])
    }

    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    pub fn pinyin(self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A two-hour wall-clock window bound to a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwoHourPeriod {
    pub name: &'static str,
    pub hours: [u32; 2],
    pub branch: Branch,
    pub organ: &'static str,
}

impl TwoHourPeriod {
    pub fn contains(&self, hour: u32) -> bool {
        self.hours.contains(&hour)
    }
}

/// The first period wraps midnight, so membership is tested per hour rather than by range.
pub const TWO_HOUR_PERIODS: [TwoHourPeriod; 12] = [
    TwoHourPeriod { name: "子时", hours: [23, 0], branch: Branch::Zi, organ: "胆" },
    TwoHourPeriod { name: "丑时", hours: [1, 2], branch: Branch::Chou, organ: "肝" },
    TwoHourPeriod { name: "寅时", hours: [3, 4], branch: Branch::Yin, organ: "肺" },
    TwoHourPeriod { name: "卯时", hours: [5, 6], branch: Branch::Mao, organ: "大肠" },
    TwoHourPeriod { name: "辰时", hours: [7, 8], branch: Branch::Chen, organ: "胃" },
    TwoHourPeriod { name: "巳时", hours: [9, 10], branch: Branch::Si, organ: "脾" },
    TwoHourPeriod { name: "午时", hours: [11, 12], branch: Branch::Wu, organ: "心" },
    TwoHourPeriod { name: "未时", hours: [13, 14], branch: Branch::Wei, organ: "小肠" },
    TwoHourPeriod { name: "申时", hours: [15, 16], branch: Branch::Shen, organ: "膀胱" },
    TwoHourPeriod { name: "酉时", hours: [17, 18], branch: Branch::You, organ: "肾" },
    TwoHourPeriod { name: "戌时", hours: [19, 20], branch: Branch::Xu, organ: "心包" },
    TwoHourPeriod { name: "亥时", hours: [21, 22], branch: Branch::Hai, organ: "三焦" },
];

pub fn two_hour_period(hour: u32) -> Option<&'static TwoHourPeriod> {
    TWO_HOUR_PERIODS.iter().find(|p| p.contains(hour))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_wraps() {
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(12), Branch::Zi);
        assert_eq!(Branch::from_index(4), Branch::Chen);
    }

    #[test]
    fn earth_has_four_branches() {
        let earth = Branch::ALL.iter().filter(|b| b.element() == Element::Earth).count();
        assert_eq!(earth, 4);
        for e in [Element::Wood, Element::Fire, Element::Metal, Element::Water] {
            assert_eq!(Branch::ALL.iter().filter(|b| b.element() == e).count(), 2);
        }
    }

    #[test]
    fn every_hour_has_exactly_one_period() {
        for hour in 0..24 {
            let hits = TWO_HOUR_PERIODS.iter().filter(|p| p.contains(hour)).count();
            assert_eq!(hits, 1, "hour {hour}");
        }
    }

    #[test]
    fn midnight_window_wraps() {
        assert_eq!(two_hour_period(23).unwrap().branch, Branch::Zi);
        assert_eq!(two_hour_period(0).unwrap().branch, Branch::Zi);
        assert_eq!(two_hour_period(1).unwrap().branch, Branch::Chou);
        assert_eq!(two_hour_period(22).unwrap().branch, Branch::Hai);
        assert!(two_hour_period(24).is_none());
    }

    #[test]
    fn table_is_ordered_by_branch() {
        for (i, p) in TWO_HOUR_PERIODS.iter().enumerate() {
            assert_eq!(p.branch.index(), i);
        }
    }
}
