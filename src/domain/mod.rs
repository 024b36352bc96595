//! Domain layer containing the catalog model and page arithmetic.
//!
//! - [`entities`] - Catalog data structures
//! - [`pagination`] - Page requests, page counts and navigation links
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod pagination;
pub mod repositories;
