//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgMovieRepository`] - Catalog counts, lookups and ordered slices

pub mod pg_movie_repository;

pub use pg_movie_repository::PgMovieRepository;
