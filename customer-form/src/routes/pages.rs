//! Customer page routes.

use crate::handlers::pages;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route(
            "/customers/create",
            get(pages::create_form).post(pages::create_submit),
        )
        .with_state(state)
}
