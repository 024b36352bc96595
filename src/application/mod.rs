//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Paginated listing and lookup of catalog records

pub mod services;
