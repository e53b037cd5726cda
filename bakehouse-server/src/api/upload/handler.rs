//! Image Upload Handlers
//!
//! Stores uploads verbatim under timestamp-prefixed names. No MIME or size
//! validation and no deduplication: the admin panel is the only caller and
//! it uploads what the browser file picker produced.

use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::media::{MediaError, is_safe_filename};
use crate::utils::{ApiError, ApiResult};

/// Upload response: `url` is the bare filename by convention, clients
/// resolve it against the fixed image-serving path.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub url: String,
}

/// One stored file entry
#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub filename: String,
    pub url: String,
}

/// GET /api/upload response
#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<FileEntry>,
}

/// DELETE /api/upload response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    filename: Option<String>,
}

/// POST /api/upload - 上传图片 (multipart `file` 字段)
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(f) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart request: {}", e)))?
    {
        if f.name() == Some("file") {
            original_filename = f.file_name().map(|s| s.to_string());
            field_data = Some(
                f.bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Multipart error: {}", e)))?
                    .to_vec(),
            );
            break;
        }
    }

    let data = field_data.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
    let original_name = original_filename.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    if !is_safe_filename(&original_name) {
        return Err(ApiError::bad_request("Invalid filename"));
    }

    let filename = state
        .media
        .store(&original_name, &data)
        .map_err(|e| ApiError::internal("Failed to upload file", e.to_string()))?;

    Ok(Json(UploadResponse {
        success: true,
        url: filename.clone(),
        filename,
    }))
}

/// GET /api/upload - 列出全部已上传文件
pub async fn list(State(state): State<ServerState>) -> ApiResult<Json<FileListResponse>> {
    let files = state
        .media
        .list()
        .map_err(|e| ApiError::internal("Failed to list files", e.to_string()))?
        .into_iter()
        .map(|filename| FileEntry {
            url: filename.clone(),
            filename,
        })
        .collect();

    Ok(Json(FileListResponse { files }))
}

/// DELETE /api/upload?filename= - 按文件名删除
pub async fn delete(
    State(state): State<ServerState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Json<DeleteResponse>> {
    let filename = params
        .filename
        .filter(|f| !f.is_empty())
        .ok_or_else(|| ApiError::bad_request("Filename required"))?;

    if !is_safe_filename(&filename) {
        return Err(ApiError::bad_request("Invalid filename"));
    }

    match state.media.delete(&filename) {
        Ok(()) => Ok(Json(DeleteResponse { success: true })),
        Err(MediaError::NotFound(_)) => Err(ApiError::not_found("File not found")),
        Err(e) => Err(ApiError::internal("Failed to delete file", e.to_string())),
    }
}
