use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use movie_catalog::{page_routes, store, AppState};
use tower::ServiceExt;

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

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create one movie through the form and return the list page afterwards.
pub async fn create_movie(app: &Router, title: &str, date: &str, genre: &str, price: &str) {
    let body = format!(
        "title={}&release_date={}&genre={}&price={}",
        title, date, genre, price
    );
    let response = app
        .clone()
        .oneshot(post_form("/movies/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
