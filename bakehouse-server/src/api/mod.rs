//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理端登录/登出
//! - [`menu`] - 菜单目录 CRUD
//! - [`upload`] - 图片上传与服务

pub mod auth;
pub mod health;
pub mod menu;
pub mod upload;

// Re-export common types for handlers
pub use crate::utils::{ApiError, ApiResult};
