//! Movie listing sample: scaffolded CRUD pages over a SQLite-backed store,
//! plus a small query-string binding demo.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

pub use error::AppError;
pub use models::Movie;
pub use routes::{common_routes, page_routes};
pub use service::MovieService;
pub use state::AppState;
