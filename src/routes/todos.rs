//! Todo API routes.

use crate::handlers::todos;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/todo", get(todos::list).post(todos::create))
        .route(
            "/api/todo/:id",
            get(todos::get).put(todos::update).delete(todos::delete),
        )
        .with_state(state)
}
