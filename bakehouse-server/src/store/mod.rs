//! 存储层 - 目录文件存储
//!
//! - [`CatalogStore`] - 单文件 JSON 目录存储

pub mod catalog;

pub use catalog::{CatalogStore, CategoryPatch, ItemPatch, StoreError};
