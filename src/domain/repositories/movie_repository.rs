//! Repository trait for catalog data access.

use crate::domain::entities::Movie;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the movie catalog.
///
/// The three query shapes the service issues: a total count, a lookup by
/// identifier, and an ordered offset/limit slice.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMovieRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Counts all movies in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds a movie by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Movie))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Lists movies ordered by identifier ascending.
    ///
    /// Skips `offset` rows and returns at most `limit` rows. An offset past
    /// the end of the catalog yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError>;
}
