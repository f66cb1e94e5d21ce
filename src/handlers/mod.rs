//! HTTP handlers for the todo API.

pub mod todos;
