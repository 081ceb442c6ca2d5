use std::collections::BTreeMap;

use common::model::radiator::Radiator;
use common::requests::{RadiatorPayload, StockUpdateRequest};

use super::http::{self, ApiError};

pub async fn list() -> Result<Vec<Radiator>, ApiError> {
    http::fetch_json(http::get("/radiators")).await
}

pub async fn create(payload: &RadiatorPayload) -> Result<Radiator, ApiError> {
    http::send_json(http::post("/radiators"), payload).await
}

pub async fn update(id: &str, payload: &RadiatorPayload) -> Result<Radiator, ApiError> {
    http::send_json(http::put(&format!("/radiators/{id}")), payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::expect_ok(http::delete(&format!("/radiators/{id}"))).await
}

/// Authoritative per-warehouse counts, keyed by warehouse code.
pub async fn stock(id: &str) -> Result<BTreeMap<String, u32>, ApiError> {
    http::fetch_json(http::get(&format!("/radiators/{id}/stock"))).await
}

/// Sets one warehouse count; returns the radiator with its refreshed map.
pub async fn update_stock(id: &str, request: &StockUpdateRequest) -> Result<Radiator, ApiError> {
    http::send_json(http::put(&format!("/radiators/{id}/stock")), request).await
}
