//! Read-only catalog commands: listings, single lookups and directories.

use anyhow::Result;
use moviedb_core::model::{MovieId, PersonId};
use moviedb_core::schema::Database;
use moviedb_query::{ListingEngine, ListingOptions};

use super::emit;

/// Which directory listing to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directory {
    Languages,
    Genres,
    Actors,
    Directors,
}

/// List movie summaries for a query string such as `sort=year&by=desc`.
pub fn list_movies(db: &Database, query: Option<&str>, pretty: bool) -> Result<()> {
    let options = ListingOptions::from_query_str(query.unwrap_or_default());
    let movies = ListingEngine::new(db).list(&options)?;
    emit(&movies, pretty)
}

pub fn show_movie(db: &Database, id: i64, pretty: bool) -> Result<()> {
    let detail = ListingEngine::new(db).get_movie(MovieId::new(id))?;
    emit(&detail, pretty)
}

pub fn show_person(db: &Database, id: i64, pretty: bool) -> Result<()> {
    let person = ListingEngine::new(db).get_person(PersonId::new(id))?;
    emit(&person, pretty)
}

pub fn list_directory(db: &Database, directory: Directory, pretty: bool) -> Result<()> {
    let engine = ListingEngine::new(db);
    match directory {
        Directory::Languages => emit(&engine.languages()?, pretty),
        Directory::Genres => emit(&engine.genres()?, pretty),
        Directory::Actors => emit(&engine.actors()?, pretty),
        Directory::Directors => emit(&engine.directors()?, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_core::model::{Movie, MovieDetail};
    use moviedb_query::QueryError;

    fn catalog() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.insert_movie(
            &MovieDetail::new(Movie::new("Argo").with_id(914).with_year(2012))
                .with_directors(&["Ben Affleck"]),
        )
        .unwrap();
        db
    }

    #[test]
    fn test_missing_movie_is_not_found() {
        let db = catalog();
        let err = show_movie(&db, 7, false).unwrap_err();
        let query_err = err.downcast_ref::<QueryError>().unwrap();
        assert!(query_err.is_not_found());
    }

    #[test]
    fn test_read_commands_succeed() {
        let db = catalog();
        assert!(list_movies(&db, Some("sort=title&by=desc"), false).is_ok());
        assert!(list_movies(&db, None, true).is_ok());
        assert!(show_movie(&db, 914, false).is_ok());
        assert!(list_directory(&db, Directory::Directors, false).is_ok());
    }
}
