//! Error taxonomy for listing, lookup and statistics requests.

use thiserror::Error;

/// Errors surfaced by the query engine and the statistics aggregator.
///
/// Malformed request parameters never produce an error; the options parser
/// drops them instead.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The catalog could not be read. Not retried; the cause is attached.
    #[error("storage failure: {0}")]
    Storage(#[source] moviedb_core::Error),

    /// A single-entity lookup found no record.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },
}

impl QueryError {
    /// Returns `true` when a lookup found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` when the catalog itself failed.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<moviedb_core::Error> for QueryError {
    fn from(err: moviedb_core::Error) -> Self {
        match err {
            moviedb_core::Error::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Storage(other),
        }
    }
}

/// Convenience alias for query results.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
