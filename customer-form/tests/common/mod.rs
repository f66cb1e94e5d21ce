use axum::Router;
use customer_form::{page_routes, store, AppState};

/// Fresh router over its own in-memory database, schema applied.
pub async fn setup_app() -> Router {
    let pool = store::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    store::ensure_schema(&pool)
        .await
        .expect("failed to create schema");
    page_routes(AppState { pool })
}
