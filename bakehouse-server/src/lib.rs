//! Bakehouse Server - 面包房菜单服务
//!
//! # 架构概述
//!
//! 本模块是菜单服务的主入口，提供以下核心功能：
//!
//! - **目录存储** (`store`): 单文件 JSON 目录，进程内写锁
//! - **媒体存储** (`media`): 时间戳前缀的平面图片目录
//! - **认证** (`auth`): argon2 口令 + 会话令牌，服务端强制执行
//! - **HTTP API** (`api`): 菜单 CRUD、图片上传、登录
//!
//! # 模块结构
//!
//! ```text
//! bakehouse-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 管理会话、中间件
//! ├── store/         # 目录文件存储
//! ├── media/         # 图片目录存储
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod media;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::AdminSessions;
pub use core::{Config, Server, ServerState, setup_environment};
pub use core::server::{build_app, build_router};
pub use media::MediaStore;
pub use store::CatalogStore;
pub use utils::{ApiError, ApiResult, ApiSuccess};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____        __        __
   / __ )____ _/ /_____  / /_  ____  __  __________
  / __  / __ `/ //_/ _ \/ __ \/ __ \/ / / / ___/ _ \
 / /_/ / /_/ / ,< /  __/ / / / /_/ / /_/ (__  )  __/
/_____/\__,_/_/|_|\___/_/ /_/\____/\__,_/____/\___/
    "#
    );
}
