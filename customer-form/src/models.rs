//! The data the app manages.

use serde::Deserialize;
use sqlx::FromRow;

/// One customer row. `id` is the surrogate key assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

/// Posted fields of the create form.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
}
