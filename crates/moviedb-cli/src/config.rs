use anyhow::{Context, Result};
use confyg::{env, Confygery};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the `moviedb` binary.
///
/// Sources, highest priority first:
/// 1. CLI arguments (`--db`)
/// 2. Environment variables (`MOVIEDB_*`)
/// 3. Config file (`<config_dir>/moviedb/config.toml`)
/// 4. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite catalog.
    ///
    /// - ENV: `MOVIEDB_DATABASE_PATH`
    /// - Default: `<data_dir>/moviedb/moviedb.db`
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    /// Log verbosity: off, error, warn, info, debug or trace.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from the default config file location and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load from `config_path` (skipped when missing) and the environment.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        builder
            .add_env(env::Options::with_top_level("moviedb"))
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        Ok(config)
    }

    /// Apply the `--db` flag on top of a loaded configuration.
    #[must_use]
    pub fn with_db_override(mut self, db: Option<PathBuf>) -> Self {
        if let Some(path) = db {
            self.database_path = path;
        }
        self
    }

    /// The configured level, or `Warn` when the value is not a level name.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Warn)
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moviedb")
        .join("moviedb.db")
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Linux: `~/.config/moviedb/config.toml`, with platform equivalents elsewhere.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moviedb")
        .join("config.toml")
}

pub fn example_config() -> &'static str {
    r#"# moviedb configuration
#
# Priority: CLI arguments > environment (MOVIEDB_*) > this file > defaults

# Path to the SQLite catalog.
# Environment: MOVIEDB_DATABASE_PATH=/path/to/moviedb.db
# CLI: moviedb --db /path/to/moviedb.db stats
#database_path = "/path/to/moviedb.db"

# Log level written to stderr: off, error, warn, info, debug, trace.
# RUST_LOG overrides this when set.
log_level = "warn"
"#
}

/// Write the example config to `path` unless a file is already there.
///
/// Returns true if a new file was created.
pub fn ensure_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
