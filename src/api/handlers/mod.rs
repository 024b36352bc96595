//! HTTP request handlers for API endpoints.

pub mod health;
pub mod movies;

pub use health::health_handler;
pub use movies::{get_movie_handler, list_movies_handler};
