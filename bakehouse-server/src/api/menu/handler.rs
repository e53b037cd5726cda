//! Menu API Handlers
//!
//! 所有变更共用一条路由，body 里的 `type` 字段区分分类和菜品，
//! 索引定位目标。越界索引静默忽略、照常返回成功（既有管理端
//! 依赖此行为）。变更响应携带更新后的完整目录。

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{Category, MenuItem};

use crate::core::ServerState;
use crate::store::{CategoryPatch, ItemPatch, StoreError};
use crate::utils::{ApiError, ApiResult, ApiSuccess, ok};

/// Create payload: `type` selects the variant
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuCreate {
    Category {
        name: String,
        #[serde(rename = "categoreyImage")]
        category_image: Option<String>,
    },
    Item {
        #[serde(rename = "categoryIndex")]
        category_index: usize,
        name: String,
        #[serde(rename = "itemType")]
        item_type: Option<String>,
        price: String,
        size: Option<String>,
        description: Option<String>,
        #[serde(rename = "productImage")]
        product_image: Option<String>,
    },
}

/// Update payload: positional indices select the target
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuUpdate {
    Category {
        #[serde(rename = "categoryIndex")]
        category_index: usize,
        name: Option<String>,
        #[serde(rename = "categoreyImage")]
        category_image: Option<String>,
    },
    Item {
        #[serde(rename = "categoryIndex")]
        category_index: usize,
        #[serde(rename = "itemIndex")]
        item_index: usize,
        name: Option<String>,
        #[serde(rename = "itemType")]
        item_type: Option<String>,
        price: Option<String>,
        size: Option<String>,
        description: Option<String>,
        #[serde(rename = "productImage")]
        product_image: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "categoryIndex")]
    category_index: Option<usize>,
    #[serde(rename = "itemIndex")]
    item_index: Option<usize>,
}

fn read_error(e: StoreError) -> ApiError {
    ApiError::internal("Failed to read data", e.to_string())
}

/// GET /api/menu - 完整目录，裸 JSON 数组
pub async fn list(State(state): State<ServerState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.catalog.read().await.map_err(read_error)?;
    Ok(Json(categories))
}

/// POST /api/menu - 追加分类或菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> ApiResult<Json<ApiSuccess<Vec<Category>>>> {
    let data = match payload {
        MenuCreate::Category {
            name,
            category_image,
        } => state
            .catalog
            .append_category(name, category_image.unwrap_or_default())
            .await,
        MenuCreate::Item {
            category_index,
            name,
            item_type,
            price,
            size,
            description,
            product_image,
        } => {
            let item = MenuItem {
                name,
                item_type: item_type
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| shared::models::DEFAULT_ITEM_TYPE.to_string()),
                price,
                size: size.unwrap_or_default(),
                description: description.unwrap_or_default(),
                product_image: product_image.unwrap_or_default(),
            };
            state.catalog.append_item(category_index, item).await
        }
    }
    .map_err(|e| ApiError::internal("Failed to create data", e.to_string()))?;

    Ok(ok(data))
}

/// PUT /api/menu - 按索引更新分类或菜品
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<MenuUpdate>,
) -> ApiResult<Json<ApiSuccess<Vec<Category>>>> {
    let data = match payload {
        MenuUpdate::Category {
            category_index,
            name,
            category_image,
        } => {
            state
                .catalog
                .update_category(
                    category_index,
                    CategoryPatch {
                        name,
                        category_image,
                    },
                )
                .await
        }
        MenuUpdate::Item {
            category_index,
            item_index,
            name,
            item_type,
            price,
            size,
            description,
            product_image,
        } => {
            state
                .catalog
                .update_item(
                    category_index,
                    item_index,
                    ItemPatch {
                        name,
                        item_type,
                        price,
                        size,
                        description,
                        product_image,
                    },
                )
                .await
        }
    }
    .map_err(|e| ApiError::internal("Failed to update data", e.to_string()))?;

    Ok(ok(data))
}

/// DELETE /api/menu?categoryIndex=&itemIndex= - 按索引删除
///
/// 两个索引都给 → 删单个菜品；只给 categoryIndex → 删整个分类
/// （连同全部菜品，不可恢复）。删除后后续索引前移一位。
pub async fn delete(
    State(state): State<ServerState>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Json<ApiSuccess<Vec<Category>>>> {
    let result = match (params.category_index, params.item_index) {
        (Some(category_index), Some(item_index)) => {
            state.catalog.remove_item(category_index, item_index).await
        }
        (Some(category_index), None) => state.catalog.remove_category(category_index).await,
        (None, _) => {
            return Err(ApiError::bad_request("categoryIndex required"));
        }
    };

    let data = result.map_err(|e| ApiError::internal("Failed to delete data", e.to_string()))?;
    Ok(ok(data))
}
