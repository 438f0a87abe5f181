//! Core domain model for moviedb.
//!
//! This crate defines the catalog model (Movie, Person, Genre, Language and
//! their associations), the [`CatalogRepository`] read boundary, and the
//! SQLite-backed [`schema::Database`] implementing it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod schema;

pub use catalog::{CatalogInfo, CatalogRepository};
pub use error::{Error, Result};
