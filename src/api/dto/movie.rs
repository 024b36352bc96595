//! DTOs for movie listing and detail responses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::services::MoviePage;
use crate::domain::entities::Movie;

/// JSON representation of a single movie.
///
/// `date` is rendered as `YYYY-MM-DD` or `null`. `budget` is stored as a
/// fixed-precision decimal and rendered as a JSON number.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    pub revenue: i64,
    pub country: String,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            name: m.name,
            date: m.date,
            score: m.score,
            genre: m.genre,
            overview: m.overview,
            crew: m.crew,
            orig_title: m.orig_title,
            status: m.status,
            orig_lang: m.orig_lang,
            budget: m.budget,
            revenue: m.revenue,
            country: m.country,
        }
    }
}

/// Paginated list of movies with navigation links.
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<MoviePage> for MovieListResponse {
    fn from(page: MoviePage) -> Self {
        Self {
            movies: page.movies.into_iter().map(MovieResponse::from).collect(),
            prev_page: page.prev_page,
            next_page: page.next_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn movie(date: Option<NaiveDate>) -> Movie {
        Movie {
            id: 7,
            name: "Avatar: The Way of Water".to_string(),
            date,
            score: 78.0,
            genre: "Science Fiction, Adventure, Action".to_string(),
            overview: "Set more than a decade after the events of the first film...".to_string(),
            crew: "Sam Worthington, Jake Sully".to_string(),
            orig_title: "Avatar: The Way of Water".to_string(),
            status: "Released".to_string(),
            orig_lang: "English".to_string(),
            budget: Decimal::new(46_000_000_050, 2),
            revenue: 2_320_250_281,
            country: "AU".to_string(),
        }
    }

    #[test]
    fn test_movie_response_shape() {
        let value = serde_json::to_value(MovieResponse::from(movie(NaiveDate::from_ymd_opt(
            2022, 12, 15,
        ))))
        .unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["date"], "2022-12-15");
        assert_eq!(value["budget"], json!(460_000_000.5));
        assert_eq!(value["revenue"], 2_320_250_281i64);
        assert_eq!(value.as_object().unwrap().len(), 13);
    }

    #[test]
    fn test_movie_response_null_date() {
        let value = serde_json::to_value(MovieResponse::from(movie(None))).unwrap();
        assert_eq!(value["date"], Value::Null);
    }

    #[test]
    fn test_list_response_shape() {
        let page = MoviePage {
            movies: vec![movie(None)],
            prev_page: None,
            next_page: Some("/movies/?page=2&per_page=1".to_string()),
            total_pages: 2,
            total_items: 2,
        };

        let value = serde_json::to_value(MovieListResponse::from(page)).unwrap();

        assert_eq!(value["movies"].as_array().unwrap().len(), 1);
        assert_eq!(value["prev_page"], Value::Null);
        assert_eq!(value["next_page"], "/movies/?page=2&per_page=1");
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["total_items"], 2);
    }
}
