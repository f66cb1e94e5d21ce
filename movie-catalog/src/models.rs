//! The data the app manages.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

/// One movie row. `release_date` is date-only; `price` is stored as REAL
/// (SQLite has no decimal type).
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: f64,
}

/// Posted fields of the create and edit forms. No validation beyond type
/// binding; an unparseable field is rejected by the form extractor.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: f64,
}
