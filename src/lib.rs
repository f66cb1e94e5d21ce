//! Todo REST API sample: axum handlers over a SQLite-backed store.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use models::TodoItem;
pub use routes::{common_routes, todo_routes};
pub use service::TodoService;
pub use state::AppState;
