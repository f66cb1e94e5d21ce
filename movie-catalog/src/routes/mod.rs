//! Router builders.

mod common;
mod pages;

pub use common::common_routes;
pub use pages::page_routes;
