//! Core domain entities.
//!
//! - [`Movie`] - A single film record in the catalog

pub mod movie;

pub use movie::Movie;
