use common::model::receipt::Receipt;
use common::model::sale::Sale;
use common::requests::NewSaleRequest;

use super::http::{self, ApiError};

pub async fn list() -> Result<Vec<Sale>, ApiError> {
    http::fetch_json(http::get("/sales")).await
}

pub async fn get(id: &str) -> Result<Sale, ApiError> {
    http::fetch_json(http::get(&format!("/sales/{id}"))).await
}

pub async fn create(request: &NewSaleRequest) -> Result<Sale, ApiError> {
    http::send_json(http::post("/sales"), request).await
}

pub async fn receipt(id: &str) -> Result<Receipt, ApiError> {
    http::fetch_json(http::get(&format!("/sales/{id}/receipt"))).await
}

pub async fn cancel(id: &str) -> Result<Sale, ApiError> {
    http::fetch_json(http::post(&format!("/sales/{id}/cancel"))).await
}

pub async fn refund(id: &str) -> Result<Sale, ApiError> {
    http::fetch_json(http::post(&format!("/sales/{id}/refund"))).await
}
