//! Menu Model

use serde::{Deserialize, Serialize};

/// Sentinel category that matches every menu item
pub const CATEGORY_ALL: &str = "all";

/// A dish on the menu board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Option<i64>,
    pub name: String,
    /// Category tag (e.g. "starters", "mains")
    pub category: String,
    /// Price in dollars
    pub price: f64,
}

impl MenuItem {
    pub fn new(id: Option<i64>, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}
