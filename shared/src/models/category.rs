//! Category Model

use serde::{Deserialize, Serialize};

/// Catalog category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}
