//! Read access to the stored catalog.
//!
//! [`CatalogRepository`] is the only thing the listing engine and the
//! statistics aggregator know about storage. [`crate::schema::Database`]
//! is the SQLite implementation; tests may supply their own.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Genre, Language, Link, LinkKind, Movie, MovieId, Person, PersonId, Role};

/// Corpus-level metadata kept alongside the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogInfo {
    /// When the collection was started.
    pub ground_zero: Option<DateTime<Utc>>,
    /// When the collection was last modified.
    pub last_update: Option<DateTime<Utc>>,
}

/// Read-only access to movies, people, genres, languages and their links.
///
/// Collections come back in ascending id order.
pub trait CatalogRepository {
    /// Every stored movie.
    fn movies(&self) -> Result<Vec<Movie>>;

    /// A single movie, or `None` when no movie has this id.
    fn movie(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Every row of one association table.
    fn links(&self, kind: LinkKind) -> Result<Vec<Link>>;

    /// Ids of the movies linked to `target` through `kind`.
    fn linked_movies(&self, kind: LinkKind, target: i64) -> Result<Vec<MovieId>>;

    fn movie_languages(&self, id: MovieId) -> Result<Vec<Language>>;

    fn movie_genres(&self, id: MovieId) -> Result<Vec<Genre>>;

    fn movie_people(&self, id: MovieId, role: Role) -> Result<Vec<Person>>;

    fn person(&self, id: PersonId) -> Result<Option<Person>>;

    fn people(&self) -> Result<Vec<Person>>;

    fn languages(&self) -> Result<Vec<Language>>;

    fn genres(&self) -> Result<Vec<Genre>>;

    fn catalog_info(&self) -> Result<CatalogInfo>;
}

impl<T: CatalogRepository + ?Sized> CatalogRepository for &T {
    fn movies(&self) -> Result<Vec<Movie>> {
        (**self).movies()
    }

    fn movie(&self, id: MovieId) -> Result<Option<Movie>> {
        (**self).movie(id)
    }

    fn links(&self, kind: LinkKind) -> Result<Vec<Link>> {
        (**self).links(kind)
    }

    fn linked_movies(&self, kind: LinkKind, target: i64) -> Result<Vec<MovieId>> {
        (**self).linked_movies(kind, target)
    }

    fn movie_languages(&self, id: MovieId) -> Result<Vec<Language>> {
        (**self).movie_languages(id)
    }

    fn movie_genres(&self, id: MovieId) -> Result<Vec<Genre>> {
        (**self).movie_genres(id)
    }

    fn movie_people(&self, id: MovieId, role: Role) -> Result<Vec<Person>> {
        (**self).movie_people(id, role)
    }

    fn person(&self, id: PersonId) -> Result<Option<Person>> {
        (**self).person(id)
    }

    fn people(&self) -> Result<Vec<Person>> {
        (**self).people()
    }

    fn languages(&self) -> Result<Vec<Language>> {
        (**self).languages()
    }

    fn genres(&self) -> Result<Vec<Genre>> {
        (**self).genres()
    }

    fn catalog_info(&self) -> Result<CatalogInfo> {
        (**self).catalog_info()
    }
}
