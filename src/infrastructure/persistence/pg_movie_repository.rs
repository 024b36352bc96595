//! PostgreSQL implementation of the movie repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Movie;
use crate::domain::repositories::MovieRepository;
use crate::error::AppError;

const MOVIE_COLUMNS: &str = "id, name, date, score, genre, overview, crew, orig_title, \
                             status, orig_lang, budget, revenue, country";

/// Row shape of the `movies` table.
#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
    id: i64,
    name: String,
    date: Option<NaiveDate>,
    score: f64,
    genre: String,
    overview: String,
    crew: String,
    orig_title: String,
    status: String,
    orig_lang: String,
    budget: Decimal,
    revenue: i64,
    country: String,
}

impl From<MovieRow> for Movie {
    fn from(r: MovieRow) -> Self {
        Movie {
            id: r.id,
            name: r.name,
            date: r.date,
            score: r.score,
            genre: r.genre,
            overview: r.overview,
            crew: r.crew,
            orig_title: r.orig_title,
            status: r.status,
            orig_lang: r.orig_lang,
            budget: r.budget,
            revenue: r.revenue,
            country: r.country,
        }
    }
}

/// PostgreSQL repository for catalog reads.
///
/// Queries are bound at runtime so the crate builds without a live database.
pub struct PgMovieRepository {
    pool: Arc<PgPool>,
}

impl PgMovieRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
