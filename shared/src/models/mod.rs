//! Catalog data models
//!
//! 菜单目录的数据模型，服务端与前端通过 API 共享。
//!
//! 目录是一个有序的分类列表，分类按顶层位置标识，菜品按
//! `(categoryIndex, itemIndex)` 位置对标识 —— 没有稳定 ID，
//! 删除会使后续索引整体前移一位。

pub mod category;
pub mod item;

// Re-exports
pub use category::*;
pub use item::*;
