//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`MovieRepository`] - Catalog count, lookup and ordered slices

pub mod movie_repository;

pub use movie_repository::MovieRepository;

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
