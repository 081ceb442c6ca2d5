use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    /// Short code used as the key in radiator stock maps, e.g. `"AKL"`.
    pub code: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Response of `GET /warehouses/validate-code/:code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeAvailability {
    pub available: bool,
}
