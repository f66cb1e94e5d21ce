//! End-to-end coverage of the create form through the mounted router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

mod common;
use common::setup_app;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn create_form_renders() {
    let app = setup_app().await;

    let response = app.oneshot(get("/customers/create")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("<form"));
    assert!(page.contains("name=\"name\""));
}

#[tokio::test]
async fn valid_post_persists_and_redirects_to_index() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/customers/create", "name=Maria".into()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let index = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(index.contains("Maria"));
}

#[tokio::test]
async fn empty_name_redisplays_the_form_unpersisted() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/customers/create", "name=".into()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("name is required"));
    assert!(page.contains("<form"));

    let index = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!index.contains("<li>"));
}

#[tokio::test]
async fn overlong_name_never_persists_and_redisplays_the_form() {
    let app = setup_app().await;

    let long_name = "a".repeat(101);
    let response = app
        .clone()
        .oneshot(post_form("/customers/create", format!("name={}", long_name)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("name must be at most 100 characters"));
    // The rejected value is redisplayed in the input.
    assert!(page.contains(&long_name));

    let index = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(!index.contains(&long_name));
}

#[tokio::test]
async fn name_at_the_length_bound_is_accepted() {
    let app = setup_app().await;

    let name = "b".repeat(100);
    let response = app
        .clone()
        .oneshot(post_form("/customers/create", format!("name={}", name)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let index = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(index.contains(&name));
}

#[tokio::test]
async fn index_lists_customers_in_insertion_order() {
    let app = setup_app().await;

    for name in ["First", "Second"] {
        let response = app
            .clone()
            .oneshot(post_form("/customers/create", format!("name={}", name)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let index = body_text(app.oneshot(get("/")).await.unwrap()).await;
    let first = index.find("First").unwrap();
    let second = index.find("Second").unwrap();
    assert!(first < second);
}
