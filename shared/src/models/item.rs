//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Default unit label for new items ("piece")
pub const DEFAULT_ITEM_TYPE: &str = "قطعة";

/// A single sellable menu entry
///
/// Identified only by its `(categoryIndex, itemIndex)` position pair.
/// `price` is locale-formatted decimal TEXT (e.g. "1,500"), not a number;
/// it is parsed ad hoc at display/cart time via [`crate::price::parse_price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Unit label, e.g. "قطعة" (piece) or "كيلو" (kilo)
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
    pub price: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub description: String,
    /// Image filename, empty when none
    #[serde(rename = "productImage", default)]
    pub product_image: String,
}

fn default_item_type() -> String {
    DEFAULT_ITEM_TYPE.to_string()
}
