use common::model::customer::Customer;
use common::model::sale::Sale;
use common::requests::CustomerPayload;

use super::http::{self, ApiError};

pub async fn list() -> Result<Vec<Customer>, ApiError> {
    http::fetch_json(http::get("/customers")).await
}

pub async fn get(id: &str) -> Result<Customer, ApiError> {
    http::fetch_json(http::get(&format!("/customers/{id}"))).await
}

pub async fn create(payload: &CustomerPayload) -> Result<Customer, ApiError> {
    http::send_json(http::post("/customers"), payload).await
}

pub async fn update(id: &str, payload: &CustomerPayload) -> Result<Customer, ApiError> {
    http::send_json(http::put(&format!("/customers/{id}")), payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::expect_ok(http::delete(&format!("/customers/{id}"))).await
}

pub async fn sales(id: &str) -> Result<Vec<Sale>, ApiError> {
    http::fetch_json(http::get(&format!("/customers/{id}/sales"))).await
}
