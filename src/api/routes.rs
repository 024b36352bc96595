//! API route configuration.

use crate::api::handlers::{get_movie_handler, list_movies_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Catalog routes, mounted under the configured API prefix.
///
/// # Endpoints
///
/// - `GET /movies`       - Paginated movie list
/// - `GET /movies/{id}`  - Single movie by identifier
///
/// Trailing slashes are trimmed before routing, so `/movies/` and
/// `/movies/{id}/` resolve to the same handlers.
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies_handler))
        .route("/movies/{id}", get(get_movie_handler))
}
