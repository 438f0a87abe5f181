use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Target};
use moviedb_query::QueryError;

mod commands;
mod config;

use commands::catalog::Directory;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "moviedb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/moviedb/moviedb.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List movie summaries
    ///
    /// QUERY is a URL-style parameter string. Ordering keys pair `sort` with
    /// `by` (asc or desc) by position, filters pair `query` with `value`:
    ///
    ///   moviedb movies 'sort=year&by=desc&sort=title&by=desc'
    ///
    ///   moviedb movies 'query=director&value=331&query=actor&value=2145'
    ///
    /// Sortable: title, year, score, rating, length, id.
    /// Filterable: year, score, rating, language, genre, actor, director.
    /// Unrecognized parameters are ignored.
    Movies {
        /// Sort and filter parameters
        query: Option<String>,
    },
    /// Show one movie with its languages, genres, actors and directors
    Movie {
        id: i64,
    },
    /// Show one person
    Person {
        id: i64,
    },
    /// List all languages
    Languages,
    /// List all genres
    Genres,
    /// List everyone credited as actor
    Actors,
    /// List everyone credited as director
    Directors,
    /// Show collection statistics
    Stats,
    /// Show the number of movies acquired per day
    Datecount,
    /// Add a movie from a JSON file shaped like `moviedb movie` output
    Add {
        file: PathBuf,
    },
    /// Delete a movie and its associations
    Delete {
        id: i64,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        Builder::from_default_env().target(Target::Stderr).init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(config.level_filter())
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_db_override(cli.db);
    init_logging(&config);
    log::debug!("Using database {}", config.database_path.display());

    let pretty = cli.pretty;
    let open = || commands::open_catalog(&config.database_path);

    match cli.command {
        Commands::Movies { query } => {
            commands::catalog::list_movies(&open()?, query.as_deref(), pretty)
        }
        Commands::Movie { id } => commands::catalog::show_movie(&open()?, id, pretty),
        Commands::Person { id } => commands::catalog::show_person(&open()?, id, pretty),
        Commands::Languages => {
            commands::catalog::list_directory(&open()?, Directory::Languages, pretty)
        }
        Commands::Genres => commands::catalog::list_directory(&open()?, Directory::Genres, pretty),
        Commands::Actors => commands::catalog::list_directory(&open()?, Directory::Actors, pretty),
        Commands::Directors => {
            commands::catalog::list_directory(&open()?, Directory::Directors, pretty)
        }
        Commands::Stats => commands::stats::show_statistics(&open()?, pretty),
        Commands::Datecount => commands::stats::show_date_counts(&open()?, pretty),
        Commands::Add { file } => commands::write::add_movie(&open()?, &file, pretty),
        Commands::Delete { id } => commands::write::delete_movie(&open()?, id, pretty),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config(),
        },
    }
}

/// 2 for a missing record, 1 for anything else.
fn exit_status(err: &anyhow::Error) -> u8 {
    let not_found = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<QueryError>())
        .any(QueryError::is_not_found);
    if not_found {
        2
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}
