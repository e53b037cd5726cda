//! Media Store
//!
//! 上传图片的平面目录存储。文件名为 `{unix毫秒时间戳}-{原始文件名}`，
//! 不做去重、不做内容校验；目录删除不级联 —— 删除目录条目会把它的
//! 图片孤儿化留在磁盘上（有意的取舍，`list()` 是人工清扫的清单）。

use std::fs;
use std::path::{Path, PathBuf};

/// Media store failures
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reject empty names and path traversal before touching the filesystem
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}

/// Flat-directory image store
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
}

impl MediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store uploaded bytes under a timestamp-prefixed filename
    ///
    /// Returns the stored filename. Collisions are only possible when two
    /// uploads of the same original name land in the same millisecond.
    pub fn store(&self, original_name: &str, data: &[u8]) -> Result<String, MediaError> {
        fs::create_dir_all(&self.dir)?;

        let timestamp = chrono::Utc::now().timestamp_millis();
        let filename = format!("{}-{}", timestamp, original_name);
        fs::write(self.dir.join(&filename), data)?;

        tracing::info!(filename = %filename, size = data.len(), "image stored");
        Ok(filename)
    }

    /// List every filename currently in the directory
    ///
    /// A directory that does not exist yet lists as empty.
    pub fn list(&self) -> Result<Vec<String>, MediaError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Remove a single file by exact name
    pub fn delete(&self, filename: &str) -> Result<(), MediaError> {
        let path = self.dir.join(filename);
        if !path.exists() {
            return Err(MediaError::NotFound(filename.to_string()));
        }
        fs::remove_file(&path)?;
        tracing::info!(filename = %filename, "image deleted");
        Ok(())
    }

    /// Read stored bytes, `None` when absent
    pub fn open(&self, filename: &str) -> Result<Option<Vec<u8>>, MediaError> {
        match fs::read(self.dir.join(filename)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
