//! 认证中间件
//!
//! 管理口令的执行点在服务端：客户端的登录表单只是视图门面，
//! 真正的授权由本中间件对变更类路由强制执行。
//!
//! # 公开路径（跳过认证）
//!
//! - `OPTIONS *` (CORS 预检)
//! - 非 `/api/` 路径（含 `/assets/` 图片服务）
//! - `/api/auth/login` (登录接口)
//! - `/api/health` (健康检查)
//! - `GET /api/menu` (公开菜单读取)
//!
//! 其余 `/api/` 请求要求 `Authorization: Bearer <token>`；
//! 未知或过期令牌一律 401。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::utils::ApiError;

/// Extract the token from an `Authorization: Bearer <token>` header value
fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

/// 认证中间件 - 变更类路由要求有效管理会话
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (静态图片等)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公开 API 路由跳过认证
    let is_public_api_route = path == "/api/auth/login"
        || path == "/api/health"
        || (path == "/api/menu" && req.method() == http::Method::GET);
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer);

    match token {
        Some(token) if state.sessions.validate(token) => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!(path = %path, "rejected stale or unknown admin token");
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::warn!(path = %path, "missing admin token on protected route");
            Err(ApiError::Unauthorized)
        }
    }
}
