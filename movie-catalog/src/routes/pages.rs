//! Movie and hello page routes.

use crate::handlers::{hello, pages};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/movies", get(pages::list))
        .route(
            "/movies/create",
            get(pages::create_form).post(pages::create_submit),
        )
        .route("/movies/:id", get(pages::details))
        .route(
            "/movies/:id/edit",
            get(pages::edit_form).post(pages::edit_submit),
        )
        .route(
            "/movies/:id/delete",
            get(pages::delete_form).post(pages::delete_submit),
        )
        .route("/hello", get(hello::index))
        .route("/hello/welcome", get(hello::welcome))
        .with_state(state)
}
