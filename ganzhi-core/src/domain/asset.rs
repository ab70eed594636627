//! Assets and their assigned elements.
//!
//! The catalog is a symbol-keyed map seeded with a built-in reference set;
//! config files may add or override entries. Symbols not in the catalog
//! resolve to a "Custom Search" asset carrying the default element.

use crate::calendar::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Element assigned to an asset when nothing else is known.
pub const DEFAULT_ELEMENT: Element = Element::Metal;

pub const CUSTOM_SECTOR: &str = "Custom Search";

/// GICS-style sector to element.
pub const SECTOR_ELEMENTS: [(&str, Element); 10] = [
    ("Technology", Element::Fire),
    ("Finance", Element::Metal),
    ("Real Estate", Element::Earth),
    ("Energy", Element::Fire),
    ("Healthcare", Element::Wood),
    ("Utilities", Element::Water),
    ("Consumer Discretionary", Element::Wood),
    ("Industrials", Element::Metal),
    ("Materials", Element::Earth),
    ("Communication Services", Element::Water),
];

pub fn element_for_sector(sector: &str) -> Option<Element> {
    SECTOR_ELEMENTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(sector.trim()))
        .map(|&(_, e)| e)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub element: Element,
}

impl Asset {
    pub fn new(symbol: &str, name: &str, sector: &str, element: Element) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            element,
        }
    }

    /// Placeholder for a symbol outside the catalog.
    pub fn custom(symbol: &str, element: Element) -> Self {
        let symbol = symbol.trim().to_uppercase();
        Self::new(&symbol, &symbol, CUSTOM_SECTOR, element)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    assets: BTreeMap<String, Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in reference assets, grouped by element.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let entries: [(&str, &str, &str, Element); 18] = [
            ("NVDA", "英伟达 (AI/Chip)", "科技 (火)", Element::Fire),
            ("AAPL", "苹果 (Consumer)", "科技 (火)", Element::Fire),
            ("TSLA", "特斯拉 (EV)", "汽车 (火)", Element::Fire),
            ("XOM", "埃克森美孚", "能源 (火)", Element::Fire),
            ("GLD", "SPDR黄金ETF", "贵金属 (金)", Element::Metal),
            ("GC=F", "黄金期货", "大宗商品 (金)", Element::Metal),
            ("JPM", "摩根大通", "金融 (金)", Element::Metal),
            ("BABA", "阿里巴巴", "电商 (金/水)", Element::Metal),
            ("600519.SS", "贵州茅台", "酒类 (水)", Element::Water),
            ("KO", "可口可乐", "饮料 (水)", Element::Water),
            ("ZIM", "以星航运", "海运 (水)", Element::Water),
            ("0700.HK", "腾讯控股", "社交 (水)", Element::Water),
            ("WOOD", "全球林业ETF", "林业 (木)", Element::Wood),
            ("LVMH.PA", "LVMH集团", "时尚 (木)", Element::Wood),
            ("UNH", "联合健康", "医疗 (木)", Element::Wood),
            ("VNQ", "房地产信托ETF", "地产 (土)", Element::Earth),
            ("RIO", "力拓矿业", "矿业 (土)", Element::Earth),
            ("SSE", "上证指数", "大盘 (土)", Element::Earth),
        ];
        for (symbol, name, sector, element) in entries {
            catalog.insert(Asset::new(symbol, name, sector, element));
        }
        catalog
    }

    /// Insert or replace an asset; symbols are matched case-insensitively.
    pub fn insert(&mut self, asset: Asset) -> Option<Asset> {
        self.assets.insert(asset.symbol.to_uppercase(), asset)
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.get(&symbol.trim().to_uppercase())
    }

    /// Catalog entry for `symbol`, or a custom asset carrying `default_element`.
    pub fn resolve(&self, symbol: &str, default_element: Element) -> Asset {
        self.get(symbol)
            .cloned()
            .unwrap_or_else(|| Asset::custom(symbol, default_element))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn with_element(&self, element: Element) -> Vec<&Asset> {
        self.iter().filter(|a| a.element == element).collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
