//! CLI administration tool for movie-catalog.
//!
//! Provides read-only commands for inspecting the catalog and the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Count catalog rows
//! cargo run --bin admin -- movies count
//!
//! # Show a single movie
//! cargo run --bin admin -- movies show 42
//!
//! # Print one page, exactly as the API would slice it
//! cargo run --bin admin -- movies list --page 3 --per-page 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `LINK_BASE_PATH` (optional): base of the printed page links
//!   (default: `{API_PREFIX}/movies/`, same as the server)

use movie_catalog::application::services::MovieService;
use movie_catalog::config::{load_link_base_path, mask_connection_string};
use movie_catalog::domain::entities::Movie;
use movie_catalog::domain::pagination::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, PageRequest, total_pages,
};
use movie_catalog::server::build_movie_service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for inspecting movie-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect catalog records
    Movies {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Catalog subcommands.
#[derive(Subcommand)]
enum MovieAction {
    /// Count all movies and pages
    Count {
        /// Page size used to report the page count
        #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = per_page_parser())]
        per_page: u32,
    },

    /// Show a single movie
    Show {
        /// Movie identifier
        id: i64,
    },

    /// List one page of movies ordered by identifier
    List {
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_PAGE,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = per_page_parser())]
        per_page: u32,
    },
}

/// Accepts page sizes in `1..=MAX_PER_PAGE`, the same bounds as the API.
fn per_page_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_PER_PAGE))
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Movies { action } => {
            let service = build_movie_service(pool, &load_link_base_path());
            handle_movie_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches catalog commands.
async fn handle_movie_action(action: MovieAction, service: &MovieService) -> Result<()> {
    match action {
        MovieAction::Count { per_page } => {
            let total = service.count_movies().await?;
            let pages = total_pages(total, per_page);

            println!("{}", "🎬 Catalog".bright_blue().bold());
            println!("  Movies: {}", total.to_string().green());
            println!("  Pages:  {} (per_page = {})", pages, per_page);
        }
        MovieAction::Show { id } => {
            let movie = service.get_movie_by_id(id).await?;
            print_movie_details(&movie);
        }
        MovieAction::List { page, per_page } => {
            let result = service
                .list_movies(PageRequest::new(page, per_page))
                .await?;

            println!(
                "{}",
                format!(
                    "🎬 Page {} of {} ({} movies total)",
                    page, result.total_pages, result.total_items
                )
                .bright_blue()
                .bold()
            );
            println!();

            for movie in &result.movies {
                print_movie_row(movie);
            }

            println!();
            if let Some(prev) = &result.prev_page {
                println!("  prev: {}", prev.dimmed());
            }
            if let Some(next) = &result.next_page {
                println!("  next: {}", next.dimmed());
            }
        }
    }

    Ok(())
}

/// Prints a one-line summary of a movie.
fn print_movie_row(movie: &Movie) {
    let date = movie
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "----------".to_string());

    println!(
        "  {:>6}  {}  {:>5.1}  {}",
        movie.id.to_string().yellow(),
        date,
        movie.score,
        movie.name.bold()
    );
}

/// Prints all fields of a movie.
fn print_movie_details(movie: &Movie) {
    println!("{}", format!("🎬 {}", movie.name).bright_blue().bold());
    println!();
    println!("  {:<12} {}", "ID:".bold(), movie.id);
    println!("  {:<12} {}", "Original:".bold(), movie.orig_title);
    println!(
        "  {:<12} {}",
        "Released:".bold(),
        movie
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    println!("  {:<12} {}", "Status:".bold(), movie.status);
    println!("  {:<12} {}", "Score:".bold(), movie.score);
    println!("  {:<12} {}", "Genre:".bold(), movie.genre);
    println!("  {:<12} {}", "Language:".bold(), movie.orig_lang);
    println!("  {:<12} {}", "Country:".bold(), movie.country);
    println!("  {:<12} {}", "Budget:".bold(), movie.budget);
    println!("  {:<12} {}", "Revenue:".bold(), movie.revenue);
    println!("  {:<12} {}", "Crew:".bold(), movie.crew);
    println!();
    println!("  {}", movie.overview.dimmed());
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "📊 Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("  URL:     {}", mask_connection_string(database_url));
            println!("  Version: {}", version);

            let table_size: Option<String> = sqlx::query_scalar(
                "SELECT pg_size_pretty(pg_total_relation_size(to_regclass('movies')))",
            )
            .fetch_one(pool)
            .await?;

            match table_size {
                Some(size) => println!("  movies:  {}", size),
                None => println!("  movies:  {}", "table not found".yellow()),
            }
        }
    }

    Ok(())
}
