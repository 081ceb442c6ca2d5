//! Service layer for the REST backend, one module per domain. Each function
//! is a single request/response mapping returning `Result<_, ApiError>`.

pub mod auth;
pub mod customers;
pub mod radiators;
pub mod sales;
pub mod stock;
pub mod warehouses;

mod http;

pub use http::ApiError;
