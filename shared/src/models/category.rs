//! Category Model

use serde::{Deserialize, Serialize};

use super::item::MenuItem;

/// Menu category
///
/// Identified only by its position in the top-level list. The JSON key
/// `categoreyImage` (sic) is the established on-disk and wire spelling;
/// existing menu.json files and admin clients depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Representative image filename, empty when none
    #[serde(rename = "categoreyImage", default)]
    pub category_image: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, category_image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category_image: category_image.into(),
            items: Vec::new(),
        }
    }
}
