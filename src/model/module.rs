//! Top-level navigation module.

use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::page::IconRef;

/// A top-level area of the application (e.g. "Settings").
///
/// The module name is slugified into the first segment of every pattern
/// beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Module {
    /// Module identifier.
    pub module_id: u32,

    /// Display name, also the source of the URL segment.
    pub name: String,

    /// Icon tag for the sidebar.
    #[serde(default)]
    pub icon: IconRef,

    /// Permission string (not enforced here).
    #[serde(default)]
    pub permission: String,

    /// Ordered categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}
