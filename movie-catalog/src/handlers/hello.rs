//! Query-string binding demo: named parameters map from the query string to
//! handler arguments, and untrusted input is encoded before rendering.

use crate::views;
use axum::{extract::Query, response::Html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WelcomeQuery {
    pub name: Option<String>,
    #[serde(default = "default_num_times")]
    pub num_times: u32,
}

fn default_num_times() -> u32 {
    1
}

/// GET /hello
pub async fn index() -> Html<String> {
    Html(views::hello_page())
}

/// GET /hello/welcome?name=Rick&num_times=4
pub async fn welcome(Query(query): Query<WelcomeQuery>) -> Html<String> {
    Html(views::welcome_page(
        query.name.as_deref().unwrap_or(""),
        query.num_times,
    ))
}
