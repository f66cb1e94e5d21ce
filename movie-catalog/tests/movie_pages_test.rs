//! End-to-end coverage of the scaffolded CRUD pages through the mounted
//! router.

use axum::http::{header, StatusCode};
use tower::ServiceExt;

mod common;
use common::{body_text, create_movie, get, post_form, setup_app};

#[tokio::test]
async fn create_redirects_and_lists_the_movie() {
    let app = setup_app().await;

    create_movie(&app, "Ghostbusters", "1984-06-08", "Comedy", "7.99").await;

    let list = body_text(app.oneshot(get("/movies")).await.unwrap()).await;
    assert!(list.contains("Ghostbusters"));
    assert!(list.contains("1984-06-08"));
    assert!(list.contains("Comedy"));
    assert!(list.contains("7.99"));
}

#[tokio::test]
async fn details_shows_all_fields() {
    let app = setup_app().await;
    create_movie(&app, "Alien", "1979-05-25", "Horror", "9.50").await;

    let response = app.oneshot(get("/movies/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Alien"));
    assert!(page.contains("1979-05-25"));
    assert!(page.contains("Horror"));
    assert!(page.contains("9.50"));
}

#[tokio::test]
async fn pages_for_a_missing_movie_are_not_found() {
    let app = setup_app().await;

    for uri in ["/movies/99", "/movies/99/edit", "/movies/99/delete"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    let response = app
        .oneshot(post_form(
            "/movies/99/edit",
            "title=x&release_date=2000-01-01&genre=y&price=1".into(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled_and_submit_replaces_the_row() {
    let app = setup_app().await;
    create_movie(&app, "Rio", "2011-04-15", "Animation", "3.99").await;

    let form = body_text(app.clone().oneshot(get("/movies/1/edit")).await.unwrap()).await;
    assert!(form.contains("value=\"Rio\""));
    assert!(form.contains("value=\"2011-04-15\""));

    let response = app
        .clone()
        .oneshot(post_form(
            "/movies/1/edit",
            "title=Rio2&release_date=2014-04-11&genre=Animation&price=4.99".into(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/movies"
    );

    let details = body_text(app.oneshot(get("/movies/1")).await.unwrap()).await;
    assert!(details.contains("Rio2"));
    assert!(details.contains("2014-04-11"));
    assert!(!details.contains("2011-04-15"));
}

#[tokio::test]
async fn delete_confirms_then_removes() {
    let app = setup_app().await;
    create_movie(&app, "Heat", "1995-12-15", "Crime", "5.00").await;

    let confirm = body_text(app.clone().oneshot(get("/movies/1/delete")).await.unwrap()).await;
    assert!(confirm.contains("Heat"));

    let response = app
        .clone()
        .oneshot(post_form("/movies/1/delete", String::new()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.clone().oneshot(get("/movies/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_text(app.oneshot(get("/movies")).await.unwrap()).await;
    assert!(!list.contains("Heat"));
}

#[tokio::test]
async fn title_filter_narrows_the_list() {
    let app = setup_app().await;
    create_movie(&app, "Ghostbusters", "1984-06-08", "Comedy", "7.99").await;
    create_movie(&app, "Alien", "1979-05-25", "Horror", "9.50").await;

    let list = body_text(app.clone().oneshot(get("/movies?title=ghost")).await.unwrap()).await;
    assert!(list.contains("Ghostbusters"));
    assert!(!list.contains("Alien"));

    // An empty filter shows everything.
    let list = body_text(app.oneshot(get("/movies?title=")).await.unwrap()).await;
    assert!(list.contains("Ghostbusters"));
    assert!(list.contains("Alien"));
}

#[tokio::test]
async fn home_links_to_the_sections() {
    let app = setup_app().await;

    let home = body_text(app.oneshot(get("/")).await.unwrap()).await;
    assert!(home.contains("/movies"));
    assert!(home.contains("/hello"));
}
