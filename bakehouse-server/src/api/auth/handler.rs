//! Authentication Handlers
//!
//! 单一共享管理口令换取会话令牌。口令校验在服务端执行，
//! 浏览器端的登录表单只是界面，不是边界。

use std::time::Duration;

use axum::{Json, extract::State};
use http::HeaderMap;
use serde::Deserialize;

use crate::auth::Session;
use crate::core::ServerState;
use crate::utils::{ApiError, ApiResult, ApiSuccess, ok};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/auth/login - 口令换会话令牌
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiSuccess<Session>>> {
    // Fixed delay to prevent timing attacks
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let session = state
        .sessions
        .login(&req.password)
        .map_err(|e| ApiError::internal("Login failed", e.to_string()))?;

    match session {
        Some(session) => {
            tracing::info!(expires_at = %session.expires_at, "admin session issued");
            Ok(ok(session))
        }
        None => {
            tracing::warn!("login failed - invalid password");
            Err(ApiError::Unauthorized)
        }
    }
}

/// POST /api/auth/logout - 吊销当前会话令牌
pub async fn logout(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> ApiResult<Json<ApiSuccess<bool>>> {
    if let Some(token) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    {
        state.sessions.revoke(token);
    }
    Ok(ok(true))
}
