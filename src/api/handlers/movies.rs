//! Handlers for catalog listing and lookup.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::movie::{MovieListResponse, MovieResponse};
use crate::api::dto::pagination::MovieListParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists movies one page at a time, ordered by identifier.
///
/// # Endpoint
///
/// `GET {API_PREFIX}/movies/`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 10, range: 1-20)
///
/// # Response
///
/// ```json
/// {
///   "movies": [ { "id": 1, "name": "Creed III", ... } ],
///   "prev_page": null,
///   "next_page": "/api/v1/theater/movies/?page=2&per_page=10",
///   "total_pages": 1018,
///   "total_items": 10178
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
/// Returns 404 Not Found if the catalog is empty or the page is out of range.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> Result<Json<MovieListResponse>, AppError> {
    let request = params.to_page_request()?;

    let page = state.movie_service.list_movies(request).await?;

    Ok(Json(page.into()))
}

/// Returns a single movie.
///
/// # Endpoint
///
/// `GET {API_PREFIX}/movies/{id}/`
///
/// # Errors
///
/// Returns 404 Not Found if no movie has this identifier.
pub async fn get_movie_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MovieResponse>, AppError> {
    let movie = state.movie_service.get_movie_by_id(id).await?;

    Ok(Json(movie.into()))
}
