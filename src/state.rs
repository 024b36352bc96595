//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MovieService;

/// State shared by all request handlers.
///
/// Cloning is cheap; the service sits behind an `Arc` and holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self { movie_service }
    }
}
