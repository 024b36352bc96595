//! Movie listing and lookup service.

use std::sync::Arc;

use crate::domain::entities::Movie;
use crate::domain::pagination::{PageLinks, PageRequest, total_pages};
use crate::domain::repositories::MovieRepository;
use crate::error::AppError;
use serde_json::json;

/// One page of the catalog with navigation metadata.
#[derive(Debug, Clone)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

/// Service for paging through and looking up catalog records.
///
/// The count and the slice are two independent reads. A store that shrinks
/// between them is caught by the empty-slice check rather than a transaction.
pub struct MovieService<R: MovieRepository + ?Sized = dyn MovieRepository> {
    repository: Arc<R>,
    links: PageLinks,
}

impl<R: MovieRepository + ?Sized> MovieService<R> {
    /// Creates a new movie service.
    ///
    /// `links` determines the base path used for `prev_page`/`next_page`.
    pub fn new(repository: Arc<R>, links: PageLinks) -> Self {
        Self { repository, links }
    }

    /// Returns one page of movies ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if:
    /// - The catalog is empty
    /// - The requested page lies past the last page
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_movies(&self, request: PageRequest) -> Result<MoviePage, AppError> {
        let total_items = u64::try_from(self.repository.count().await?).unwrap_or_default();
        if total_items == 0 {
            return Err(AppError::not_found("No movies found", json!({})));
        }

        let total_pages = total_pages(total_items, request.per_page());

        let movies = self
            .repository
            .list(request.offset(), request.limit())
            .await?;

        if movies.is_empty() {
            return Err(AppError::not_found(
                "No movies found",
                json!({
                    "page": request.page(),
                    "per_page": request.per_page(),
                    "total_pages": total_pages,
                }),
            ));
        }

        tracing::debug!(
            page = request.page(),
            per_page = request.per_page(),
            returned = movies.len(),
            total_items,
            "Fetched movie page"
        );

        Ok(MoviePage {
            movies,
            prev_page: self.links.previous(&request),
            next_page: self.links.next(&request, total_pages),
            total_pages,
            total_items,
        })
    }

    /// Retrieves a single movie by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no movie has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_movie_by_id(&self, id: i64) -> Result<Movie, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                "Movie with the given ID was not found.",
                json!({ "id": id }),
            )
        })
    }

    /// Counts all movies in the catalog.
    ///
    /// Used by the health check and the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_movies(&self) -> Result<u64, AppError> {
        Ok(u64::try_from(self.repository.count().await?).unwrap_or_default())
    }
}
