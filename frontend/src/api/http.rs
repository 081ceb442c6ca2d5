//! Shared request plumbing: base URL, bearer-token attachment, status
//! handling and body decoding.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session_store;

const API_BASE: &str = "/api/v1";

/// What went wrong with a request, from the caller's point of view.
///
/// `Unauthorized` is the only status with dedicated handling: every screen
/// routes it to the app root, which clears the session and shows the login
/// form. Everything else is terminal for that user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attaches the bearer token from the session store, when one exists.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session_store::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub fn get(path: &str) -> RequestBuilder {
    authorize(Request::get(&url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    authorize(Request::post(&url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    authorize(Request::put(&url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    authorize(Request::delete(&url(path)))
}

/// POST without a bearer token, for login and refresh.
pub fn post_public(path: &str) -> RequestBuilder {
    Request::post(&url(path))
}

/// Sends a bodyless request and decodes a JSON response.
pub async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = send(builder).await?;
    decode(checked(response).await?).await
}

/// Sends a JSON body and decodes a JSON response.
pub async fn send_json<T, B>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = builder
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(checked(response).await?).await
}

/// Sends a bodyless request where only the status matters.
pub async fn expect_ok(builder: RequestBuilder) -> Result<(), ApiError> {
    let response = send(builder).await?;
    checked(response).await.map(|_| ())
}

/// Sends a JSON body where only the status matters.
pub async fn send_json_expect_ok<B>(builder: RequestBuilder, body: &B) -> Result<(), ApiError>
where
    B: Serialize + ?Sized,
{
    let request = builder
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    checked(response).await.map(|_| ())
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

/// Maps non-2xx statuses to `ApiError`, reading the backend's
/// `{"error": "..."}` body when one is present.
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = error_message(&response).await;
        gloo_console::error!(format!("api error {status}: {message}"));
        return Err(ApiError::Api { status, message });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn error_message(response: &Response) -> String {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.error)
            .unwrap_or(body),
        _ => response.status_text(),
    }
}
