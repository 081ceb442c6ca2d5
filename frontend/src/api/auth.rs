use common::model::user::User;
use common::requests::{ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest};
use common::session::Session;

use super::http::{self, ApiError};

pub async fn login(request: &LoginRequest) -> Result<Session, ApiError> {
    http::send_json(http::post_public("/auth/login"), request).await
}

/// Best-effort server-side invalidation; the caller clears local state
/// regardless of the outcome.
pub async fn logout() -> Result<(), ApiError> {
    http::expect_ok(http::post("/auth/logout")).await
}

pub async fn refresh(refresh_token: &str) -> Result<Session, ApiError> {
    let request = RefreshRequest {
        refresh_token: refresh_token.to_string(),
    };
    http::send_json(http::post_public("/auth/refresh"), &request).await
}

pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    http::send_json(http::post("/auth/register"), request).await
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    http::send_json_expect_ok(http::post("/auth/change-password"), request).await
}
