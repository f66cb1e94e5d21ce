//! MovieService: typed CRUD over the movies table.

mod movies;

pub use movies::MovieService;
