//! 工具模块 - 错误处理和日志
//!
//! - [`error`] - API 错误类型和响应信封
//! - [`logger`] - tracing 日志初始化

pub mod error;
pub mod logger;

pub use error::{ApiError, ApiResult, ApiSuccess, ok};
pub use logger::{init_logger, init_logger_with_file};
