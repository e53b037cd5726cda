//! 管理端认证
//!
//! 单一共享口令换取不透明会话令牌，在服务端强制执行：
//! - [`AdminSessions`] - argon2 口令校验 + 会话令牌表
//! - [`require_admin`] - 保护变更类路由的 Axum 中间件

pub mod middleware;
pub mod session;

pub use middleware::require_admin;
pub use session::{AdminSessions, Session};
