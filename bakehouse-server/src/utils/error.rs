//! 统一错误处理
//!
//! 提供应用级错误类型和响应信封：
//! - [`ApiError`] - API 错误枚举
//! - [`ApiSuccess`] - 成功响应信封
//!
//! # 响应信封
//!
//! 成功响应为 `{"success": true, "data": ...}`，失败响应为
//! `{"error": "..."}`，状态码限于 200/400/401/404/500。
//! 内部错误 (文件不可读、JSON 损坏等) 统一折叠为一条通用消息，
//! 细节只进日志，不上 wire。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(ApiError::NotFound("File not found".into()))
//!
//! // 返回成功响应
//! Ok(ok(data))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 成功响应信封
///
/// ```json
/// { "success": true, "data": [ ... ] }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 失败响应体
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// API 错误枚举
///
/// | 变体 | HTTP 状态码 |
/// |------|------------|
/// | BadRequest | 400 |
/// | Unauthorized | 401 |
/// | NotFound | 404 |
/// | Internal | 500 |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    /// 请求参数缺失或无效 (400)
    BadRequest(String),

    #[error("Unauthorized")]
    /// 未登录或令牌无效/过期 (401)
    Unauthorized,

    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    /// 内部错误 (500)：wire 上只携带通用消息，细节进日志
    #[error("{message}")]
    Internal {
        /// 通用的对外消息，如 "Failed to read data"
        message: String,
        /// 内部细节，仅用于日志
        detail: String,
    },
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal { message, detail } => {
                error!(target: "api", detail = %detail, "Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess {
        success: true,
        data: Some(data),
    })
}
