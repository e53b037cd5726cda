//! Menu API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/menu | GET | 完整目录 (裸 JSON 数组) | 无 |
//! | /api/menu | POST | 追加分类/菜品 | 管理会话 |
//! | /api/menu | PUT | 按索引更新分类/菜品 | 管理会话 |
//! | /api/menu | DELETE | 按索引删除分类/菜品 | 管理会话 |

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/menu",
        get(handler::list)
            .post(handler::create)
            .put(handler::update)
            .delete(handler::delete),
    )
}
