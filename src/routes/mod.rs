//! Router builders.

mod common;
mod todos;

pub use common::common_routes;
pub use todos::todo_routes;
