//! Catalog writes: adding a movie from a JSON document and deleting one.

use std::path::Path;

use anyhow::{Context, Result};
use moviedb_core::model::{MovieDetail, MovieId};
use moviedb_core::schema::Database;
use moviedb_query::{ListingEngine, QueryError};
use serde::Serialize;

use super::emit;

#[derive(Debug, Serialize)]
struct Deleted {
    rows_deleted: usize,
}

/// Insert the movie described by a detail-shaped JSON file and print the
/// stored record.
pub fn add_movie(db: &Database, file: &Path, pretty: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let detail: MovieDetail = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse movie from {}", file.display()))?;

    let id = db.insert_movie(&detail)?;
    let stored = ListingEngine::new(db).get_movie(id)?;
    emit(&stored, pretty)
}

/// Delete a movie and its associations. An unknown id is reported as not
/// found.
pub fn delete_movie(db: &Database, id: i64, pretty: bool) -> Result<()> {
    let rows_deleted = db
        .delete_movie(MovieId::new(id))
        .map_err(QueryError::from)?;
    emit(&Deleted { rows_deleted }, pretty)
}
