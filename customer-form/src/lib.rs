//! Customer creation form sample: a validated HTML form over a
//! SQLite-backed store.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;
pub mod views;

pub use error::AppError;
pub use models::Customer;
pub use routes::{common_routes, page_routes};
pub use service::CustomerService;
pub use state::AppState;
