//! Upload Routes
//!
//! 图片上传/列表/删除走管理会话，已存文件按约定路径公开服务。
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/upload | POST | 上传图片 (multipart `file` 字段) | 管理会话 |
//! | /api/upload | GET | 列出全部已上传文件 | 管理会话 |
//! | /api/upload | DELETE | 按文件名删除 | 管理会话 |
//! | /assets/images/items/{filename} | GET | 按裸文件名服务图片 | 无 |

mod handler;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;
use crate::media::is_safe_filename;

/// Serve file response
enum ServeFileResponse {
    Ok(Bytes, String),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for ServeFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServeFileResponse::Ok(content, content_type) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
                .into_response(),
            ServeFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            ServeFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve stored image handler
async fn serve_image(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> ServeFileResponse {
    // Security check: prevent path traversal
    if !is_safe_filename(&filename) {
        return ServeFileResponse::BadRequest("Invalid filename");
    }

    let content_type = mime_guess::from_path(&filename)
        .first_or_octet_stream()
        .to_string();

    match state.media.open(&filename) {
        Ok(Some(content)) => ServeFileResponse::Ok(content.into(), content_type),
        Ok(None) => ServeFileResponse::NotFound,
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "failed to read stored image");
            ServeFileResponse::NotFound
        }
    }
}

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new()
        // Upload management API - admin session required (enforced by middleware)
        .route(
            "/api/upload",
            get(handler::list)
                .post(handler::upload)
                .delete(handler::delete),
        )
        // Serve stored images - public access
        .route("/assets/images/items/{filename}", get(serve_image))
}
