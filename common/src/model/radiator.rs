use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quantities at or below this count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A catalog entry. The `stock` map is a denormalized snapshot from the
/// backend, keyed by warehouse code. Codes may reference warehouses that no
/// longer exist; the map is rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Radiator {
    pub id: String,
    pub brand: String,
    pub code: String,
    pub name: String,
    pub year: u16,
    #[serde(default)]
    pub stock: BTreeMap<String, u32>,
    pub retail_price: f64,
    pub trade_price: f64,
}

impl Radiator {
    /// Total units held across every warehouse.
    pub fn total_stock(&self) -> u32 {
        self.stock.values().sum()
    }

    pub fn stock_in(&self, warehouse_code: &str) -> u32 {
        self.stock.get(warehouse_code).copied().unwrap_or(0)
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::for_quantity(self.total_stock())
    }

    /// Case-insensitive substring match over brand, code and name. An empty
    /// or whitespace-only query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.brand.to_lowercase().contains(&query)
            || self.code.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            q if q <= LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "status-out",
            StockStatus::LowStock => "status-low",
            StockStatus::InStock => "status-in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radiator(stock: &[(&str, u32)]) -> Radiator {
        Radiator {
            id: "r-1".into(),
            brand: "Mishimoto".into(),
            code: "MMRAD-001".into(),
            name: "Aluminium radiator, Civic".into(),
            year: 2018,
            stock: stock
                .iter()
                .map(|(code, qty)| (code.to_string(), *qty))
                .collect(),
            retail_price: 499.0,
            trade_price: 399.0,
        }
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(5), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(6), StockStatus::InStock);
    }

    #[test]
    fn total_stock_sums_all_warehouses() {
        let r = radiator(&[("AKL", 3), ("WLG", 2), ("CHC", 0)]);
        assert_eq!(r.total_stock(), 5);
        assert_eq!(r.status(), StockStatus::LowStock);
        assert_eq!(r.stock_in("AKL"), 3);
        assert_eq!(r.stock_in("DUD"), 0);
    }

    #[test]
    fn empty_stock_map_is_out_of_stock() {
        let r = radiator(&[]);
        assert_eq!(r.total_stock(), 0);
        assert_eq!(r.status(), StockStatus::OutOfStock);
    }

    #[test]
    fn query_matches_brand_code_and_name_case_insensitively() {
        let r = radiator(&[]);
        assert!(r.matches_query(""));
        assert!(r.matches_query("  "));
        assert!(r.matches_query("mishi"));
        assert!(r.matches_query("mmrad"));
        assert!(r.matches_query("CIVIC"));
        assert!(!r.matches_query("falcon"));
    }
}
