//! Movie CRUD page handlers: list, details, create, edit, delete.
//!
//! Mutations are plain form posts that redirect back to the list; pages
//! addressing a missing id return 404.

use crate::error::AppError;
use crate::models::MovieForm;
use crate::service::MovieService;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}

/// GET /: entry page.
pub async fn home() -> Html<String> {
    Html(views::home_page())
}

/// GET /movies: all movies, optionally filtered by title substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let movies = MovieService::list(&state.pool, query.title.as_deref()).await?;
    Ok(Html(views::list_page(
        &movies,
        query.title.as_deref().unwrap_or(""),
    )))
}

/// GET /movies/:id: details page, 404 if absent.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let movie = MovieService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(Html(views::details_page(&movie)))
}

/// GET /movies/create: the empty form.
pub async fn create_form() -> Html<String> {
    Html(views::create_page())
}

/// POST /movies/create: insert, then back to the list.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<MovieForm>,
) -> Result<Redirect, AppError> {
    let movie = MovieService::create(&state.pool, &form).await?;
    tracing::info!(id = movie.id, "created movie");
    Ok(Redirect::to("/movies"))
}

/// GET /movies/:id/edit: form prefilled with current values, 404 if absent.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let movie = MovieService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(Html(views::edit_page(&movie)))
}

/// POST /movies/:id/edit: full replace, then back to the list.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<MovieForm>,
) -> Result<Redirect, AppError> {
    if !MovieService::update(&state.pool, id, &form).await? {
        return Err(AppError::NotFound(format!("movie {}", id)));
    }
    Ok(Redirect::to("/movies"))
}

/// GET /movies/:id/delete: confirmation page, 404 if absent.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let movie = MovieService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(Html(views::delete_page(&movie)))
}

/// POST /movies/:id/delete: remove, then back to the list.
pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if !MovieService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("movie {}", id)));
    }
    tracing::info!(id, "deleted movie");
    Ok(Redirect::to("/movies"))
}
