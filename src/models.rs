//! The data the app manages.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One to-do item. `id` is the surrogate key assigned by the store.
/// Inbound bodies may omit any field; missing fields bind to their defaults
/// (0, empty string, false).
#[derive(Clone, Debug, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}
