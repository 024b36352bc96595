//! Top-level router combining the catalog API and the health check.
//!
//! # Route Structure
//!
//! - `GET /health`                     - Health check (database)
//! - `GET {API_PREFIX}/movies/`        - Paginated movie list
//! - `GET {API_PREFIX}/movies/{id}/`   - Single movie
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the catalog routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let catalog = api::routes::movie_routes().layer(rate_limit::layer(
        config.rate_limit_per_second,
        config.rate_limit_burst,
    )?);

    let router = Router::new().route("/health", get(health_handler));

    let router = if config.api_prefix.is_empty() {
        router.merge(catalog)
    } else {
        router.nest(&config.api_prefix, catalog)
    };

    let router = router.with_state(state).layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
