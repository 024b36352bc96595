#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use movie_catalog::application::services::MovieService;
use movie_catalog::domain::entities::Movie;
use movie_catalog::domain::pagination::PageLinks;
use movie_catalog::domain::repositories::MovieRepository;
use movie_catalog::error::AppError;
use movie_catalog::state::AppState;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

pub const LINK_BASE: &str = "/api/v1/theater/movies/";

/// Catalog held in memory, keyed and ordered by id.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<BTreeMap<i64, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        Self {
            movies: RwLock::new(movies.into_iter().map(|m| (m.id, m)).collect()),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.movies.read().unwrap().len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        Ok(self.movies.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError> {
        Ok(self
            .movies
            .read()
            .unwrap()
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingMovieRepository;

#[async_trait]
impl MovieRepository for FailingMovieRepository {
    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Movie>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn list(&self, _offset: i64, _limit: i64) -> Result<Vec<Movie>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn test_movie(id: i64) -> Movie {
    Movie {
        id,
        name: format!("Movie {id}"),
        date: NaiveDate::from_ymd_opt(2023, 1, 1 + (id % 28) as u32),
        score: 50.0 + (id % 50) as f64,
        genre: "Drama".to_string(),
        overview: format!("Overview of movie {id}"),
        crew: "Actor One, Role One".to_string(),
        orig_title: format!("Original {id}"),
        status: "Released".to_string(),
        orig_lang: "English".to_string(),
        budget: Decimal::new(12_500_000_00 + id, 2),
        revenue: 100_000_000 + id,
        country: "US".to_string(),
    }
}

pub fn create_test_state(repository: Arc<dyn MovieRepository>) -> AppState {
    let service = MovieService::new(repository, PageLinks::new(LINK_BASE));
    AppState::new(Arc::new(service))
}

/// State over an in-memory catalog with ids `1..=count`.
pub fn create_catalog_state(count: i64) -> AppState {
    create_test_state(Arc::new(InMemoryMovieRepository::with_movies(
        (1..=count).map(test_movie),
    )))
}

/// Inserts a movie row and returns its generated id.
pub async fn insert_movie(pool: &PgPool, name: &str, date: Option<NaiveDate>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO movies
            (name, date, score, genre, overview, crew, orig_title, status, orig_lang, budget, revenue, country)
        VALUES ($1, $2, 72.5, 'Drama', 'An overview', 'Crew', $1, 'Released', 'English', $3, 150000000, 'US')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(date)
    .bind(Decimal::new(7_500_000_050, 2))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a movie row with an explicit id.
pub async fn insert_movie_with_id(pool: &PgPool, id: i64, name: &str) {
    sqlx::query(
        r#"
        INSERT INTO movies
            (id, name, date, score, genre, overview, crew, orig_title, status, orig_lang, budget, revenue, country)
        VALUES ($1, $2, NULL, 60, 'Comedy', 'Overview', 'Crew', $2, 'Released', 'French', 1000, 2000, 'FR')
        "#,
    )
    .bind(id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}
