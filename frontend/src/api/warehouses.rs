use common::model::warehouse::{CodeAvailability, Warehouse};
use common::requests::WarehousePayload;

use super::http::{self, ApiError};

pub async fn list() -> Result<Vec<Warehouse>, ApiError> {
    http::fetch_json(http::get("/warehouses")).await
}

pub async fn create(payload: &WarehousePayload) -> Result<Warehouse, ApiError> {
    http::send_json(http::post("/warehouses"), payload).await
}

pub async fn update(id: &str, payload: &WarehousePayload) -> Result<Warehouse, ApiError> {
    http::send_json(http::put(&format!("/warehouses/{id}")), payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::expect_ok(http::delete(&format!("/warehouses/{id}"))).await
}

pub async fn by_code(code: &str) -> Result<Warehouse, ApiError> {
    http::fetch_json(http::get(&format!("/warehouses/code/{code}"))).await
}

/// Checks whether a warehouse code is still free before creating one.
pub async fn validate_code(code: &str) -> Result<CodeAvailability, ApiError> {
    http::fetch_json(http::get(&format!("/warehouses/validate-code/{code}"))).await
}
