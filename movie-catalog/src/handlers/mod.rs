//! HTTP handlers for the movie pages and the hello demo.

pub mod hello;
pub mod pages;
