use common::model::radiator::Radiator;
use common::model::stock::StockSummary;

use super::http::{self, ApiError};

pub async fn summary() -> Result<StockSummary, ApiError> {
    http::fetch_json(http::get("/stock/summary")).await
}

pub async fn all_radiators() -> Result<Vec<Radiator>, ApiError> {
    http::fetch_json(http::get("/stock/all-radiators")).await
}
