//! Module categories.

use serde::{Deserialize, Serialize};

use crate::model::page::{IconRef, Page};

/// A group of pages inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub category_id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: IconRef,
    #[serde(default)]
    pub permission: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}
