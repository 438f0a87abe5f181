pub mod catalog;
pub mod config;
pub mod stats;
pub mod write;

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use moviedb_core::schema::Database;
use serde::Serialize;

/// Open the catalog, creating its directory on first use.
pub fn open_catalog(path: &Path) -> Result<Database> {
    Database::open(path).with_context(|| format!("Failed to open database {}", path.display()))
}

/// Write `value` to stdout as one JSON document.
pub fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write to stdout")?;
    Ok(())
}
