//! Listing query engine and statistics aggregator for moviedb.
//!
//! Turns repeatable request parameters into ordered movie listings and
//! derives corpus-wide statistics. Everything here is read-only and holds no
//! state between requests; storage is reached through
//! [`moviedb_core::CatalogRepository`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod listing;
pub mod lookup;
pub mod options;
pub mod stats;

pub use error::{QueryError, QueryResult};
pub use listing::ListingEngine;
pub use options::{Criterion, Direction, FilterField, ListingOptions, SortField, SortKey};
pub use stats::{StatisticsAggregator, StatisticsSnapshot};
