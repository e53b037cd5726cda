//! Catalog Store
//!
//! 整个目录是一个有序分类列表，序列化为磁盘上的单个 JSON 文件。
//! 每次变更都是 读文件 → 内存修改 → 整体回写 (pretty-printed)。
//!
//! # 并发模型
//!
//! 文件是唯一事实来源，进程内 [`RwLock`] 互斥整个读-改-写序列，
//! 消除并发管理端写入时的 lost-update。没有跨进程锁。
//!
//! # 索引语义
//!
//! 分类/菜品只按位置索引标识。删除是数组 splice —— 后续索引整体
//! 前移一位，调用方不能跨删除持有旧索引。越界索引的变更静默忽略
//! 并照常返回成功（既有管理端依赖此行为）。

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::{Category, MenuItem};
use tokio::sync::RwLock;

/// Store-level failure; collapsed to a generic API message at the handler
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("menu file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("menu file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Partial category update
///
/// 回退策略沿用既有 wire 语义，字段之间并不一致：
/// - `name`: 缺失或空串都回退到旧值
/// - `category_image`: 仅缺失时回退，空串会覆盖
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub category_image: Option<String>,
}

/// Partial item update
///
/// `name`/`item_type`/`price` 在缺失或空串时回退到旧值；
/// `size`/`description`/`product_image` 仅缺失时回退。
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub item_type: Option<String>,
    pub price: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub product_image: Option<String>,
}

/// Keep prior value when the patch field is absent OR empty
fn fallback_falsy(patch: Option<String>, prior: &str) -> String {
    match patch {
        Some(v) if !v.is_empty() => v,
        _ => prior.to_string(),
    }
}

/// Keep prior value only when the patch field is absent
fn fallback_absent(patch: Option<String>, prior: &str) -> String {
    patch.unwrap_or_else(|| prior.to_string())
}

/// Single-file JSON catalog store
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Category>, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, categories: &[Category]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(categories)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Read the full category list verbatim
    pub async fn read(&self) -> Result<Vec<Category>, StoreError> {
        let _guard = self.lock.read().await;
        self.load()
    }

    /// Run one read-modify-write cycle under the write lock
    async fn mutate<F>(&self, f: F) -> Result<Vec<Category>, StoreError>
    where
        F: FnOnce(&mut Vec<Category>),
    {
        let _guard = self.lock.write().await;
        let mut categories = self.load()?;
        f(&mut categories);
        self.save(&categories)?;
        Ok(categories)
    }

    /// Append a category with no items
    pub async fn append_category(
        &self,
        name: String,
        category_image: String,
    ) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| {
            categories.push(Category::new(name, category_image));
        })
        .await
    }

    /// Append an item to the category at `category_index`
    ///
    /// Out-of-range index: no-op, the unchanged document is still returned.
    pub async fn append_item(
        &self,
        category_index: usize,
        item: MenuItem,
    ) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| match categories.get_mut(category_index) {
            Some(category) => category.items.push(item),
            None => {
                tracing::warn!(category_index, "append_item: index out of range, ignoring");
            }
        })
        .await
    }

    /// Patch the category at `category_index`
    pub async fn update_category(
        &self,
        category_index: usize,
        patch: CategoryPatch,
    ) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| {
            if let Some(category) = categories.get_mut(category_index) {
                category.name = fallback_falsy(patch.name, &category.name);
                category.category_image = fallback_absent(patch.category_image, &category.category_image);
            }
        })
        .await
    }

    /// Patch the item at `(category_index, item_index)`
    pub async fn update_item(
        &self,
        category_index: usize,
        item_index: usize,
        patch: ItemPatch,
    ) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| {
            let item = categories
                .get_mut(category_index)
                .and_then(|c| c.items.get_mut(item_index));
            if let Some(item) = item {
                item.name = fallback_falsy(patch.name, &item.name);
                item.item_type = fallback_falsy(patch.item_type, &item.item_type);
                item.price = fallback_falsy(patch.price, &item.price);
                item.size = fallback_absent(patch.size, &item.size);
                item.description = fallback_absent(patch.description, &item.description);
                item.product_image = fallback_absent(patch.product_image, &item.product_image);
            }
        })
        .await
    }

    /// Splice out one item; subsequent item indices shift down by one
    pub async fn remove_item(
        &self,
        category_index: usize,
        item_index: usize,
    ) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| {
            if let Some(category) = categories.get_mut(category_index)
                && item_index < category.items.len()
            {
                category.items.remove(item_index);
            }
        })
        .await
    }

    /// Splice out a whole category and all its items
    ///
    /// Subsequent category indices shift down by one; stale indices held by
    /// clients (open edit forms, cached carts) are invalidated. Referenced
    /// images stay on disk (orphaning is an accepted tradeoff).
    pub async fn remove_category(&self, category_index: usize) -> Result<Vec<Category>, StoreError> {
        self.mutate(|categories| {
            if category_index < categories.len() {
                categories.remove(category_index);
            }
        })
        .await
    }
}
