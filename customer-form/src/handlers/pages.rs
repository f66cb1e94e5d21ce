//! Page handlers: customer list and the create form.
//!
//! A failed validation is not an error response: the form is redisplayed
//! with the submitted value and messages, and nothing is persisted.

use crate::error::AppError;
use crate::models::CustomerForm;
use crate::service::CustomerService;
use crate::state::AppState;
use crate::validation;
use crate::views;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

/// GET /: the index page the create flow redirects to.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok(Html(views::index_page(&customers)))
}

/// GET /customers/create: the empty form.
pub async fn create_form() -> Html<String> {
    Html(views::create_page("", &[]))
}

/// POST /customers/create: validate, persist, redirect to the index.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Response, AppError> {
    let errors = validation::validate_name(&form.name);
    if !errors.is_empty() {
        return Ok(Html(views::create_page(&form.name, &errors)).into_response());
    }
    let customer = CustomerService::create(&state.pool, &form.name).await?;
    tracing::info!(id = customer.id, "created customer");
    Ok(Redirect::to("/").into_response())
}
