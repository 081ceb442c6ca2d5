use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::radiator::{Radiator, StockStatus};
use crate::model::warehouse::Warehouse;

/// Network-wide stock overview, either fetched from `GET /stock/summary` or
/// aggregated client-side from a full radiator list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total_units: u64,
    pub total_radiators: u32,
    pub low_stock: u32,
    pub out_of_stock: u32,
    #[serde(default)]
    pub warehouses: Vec<WarehouseStock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    pub code: String,
    pub name: String,
    pub units: u64,
}

impl StockSummary {
    /// Aggregate per-warehouse totals from radiator stock maps.
    ///
    /// Known warehouses appear in list order, including ones holding nothing.
    /// Stock-map keys with no matching warehouse (the backend does not clean
    /// maps up when a warehouse is deleted) are appended afterwards under
    /// their bare code.
    pub fn from_radiators(radiators: &[Radiator], warehouses: &[Warehouse]) -> Self {
        let mut per_code: BTreeMap<&str, u64> = BTreeMap::new();
        for radiator in radiators {
            for (code, qty) in &radiator.stock {
                *per_code.entry(code.as_str()).or_default() += u64::from(*qty);
            }
        }

        let mut rows = Vec::with_capacity(warehouses.len());
        for warehouse in warehouses {
            let units = per_code.remove(warehouse.code.as_str()).unwrap_or(0);
            rows.push(WarehouseStock {
                code: warehouse.code.clone(),
                name: warehouse.name.clone(),
                units,
            });
        }
        for (code, units) in per_code {
            rows.push(WarehouseStock {
                code: code.to_string(),
                name: code.to_string(),
                units,
            });
        }

        let low_stock = radiators
            .iter()
            .filter(|r| r.status() == StockStatus::LowStock)
            .count() as u32;
        let out_of_stock = radiators
            .iter()
            .filter(|r| r.status() == StockStatus::OutOfStock)
            .count() as u32;

        StockSummary {
            total_units: radiators.iter().map(|r| u64::from(r.total_stock())).sum(),
            total_radiators: radiators.len() as u32,
            low_stock,
            out_of_stock,
            warehouses: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radiator(id: &str, stock: &[(&str, u32)]) -> Radiator {
        Radiator {
            id: id.into(),
            brand: "Koyo".into(),
            code: format!("K-{id}"),
            name: "radiator".into(),
            year: 2020,
            stock: stock
                .iter()
                .map(|(code, qty)| (code.to_string(), *qty))
                .collect(),
            retail_price: 100.0,
            trade_price: 80.0,
        }
    }

    fn warehouse(code: &str, name: &str) -> Warehouse {
        Warehouse {
            id: format!("w-{code}"),
            name: name.into(),
            code: code.into(),
            location: "NZ".into(),
            address: "1 Depot Rd".into(),
            phone: "09 555 0100".into(),
            email: "depot@example.co.nz".into(),
        }
    }

    #[test]
    fn aggregates_across_warehouses_and_counts_statuses() {
        let radiators = [
            radiator("a", &[("AKL", 4), ("WLG", 1)]), // low (5)
            radiator("b", &[("AKL", 10)]),            // in stock
            radiator("c", &[]),                       // out
        ];
        let warehouses = [warehouse("AKL", "Auckland"), warehouse("WLG", "Wellington")];

        let summary = StockSummary::from_radiators(&radiators, &warehouses);
        assert_eq!(summary.total_units, 15);
        assert_eq!(summary.total_radiators, 3);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.warehouses.len(), 2);
        assert_eq!(summary.warehouses[0].units, 14);
        assert_eq!(summary.warehouses[1].units, 1);
    }

    #[test]
    fn unknown_stock_map_codes_are_kept_under_their_bare_code() {
        let radiators = [radiator("a", &[("AKL", 2), ("GONE", 7)])];
        let warehouses = [warehouse("AKL", "Auckland")];

        let summary = StockSummary::from_radiators(&radiators, &warehouses);
        assert_eq!(summary.warehouses.len(), 2);
        assert_eq!(summary.warehouses[1].code, "GONE");
        assert_eq!(summary.warehouses[1].name, "GONE");
        assert_eq!(summary.warehouses[1].units, 7);
    }

    #[test]
    fn empty_warehouse_still_gets_a_row() {
        let radiators = [radiator("a", &[("AKL", 2)])];
        let warehouses = [warehouse("AKL", "Auckland"), warehouse("CHC", "Christchurch")];

        let summary = StockSummary::from_radiators(&radiators, &warehouses);
        assert_eq!(summary.warehouses[1].code, "CHC");
        assert_eq!(summary.warehouses[1].units, 0);
    }
}
