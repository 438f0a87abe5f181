//! Single-entity lookups and name-ordered directory listings.

use std::collections::BTreeSet;

use moviedb_core::model::{
    Genre, Language, LinkKind, MovieDetail, MovieId, Person, PersonId, Role,
};
use moviedb_core::CatalogRepository;

use crate::error::{QueryError, QueryResult};
use crate::listing::ListingEngine;

impl<R: CatalogRepository> ListingEngine<R> {
    /// Fetch a movie with all four associations, each ordered by name.
    pub fn get_movie(&self, id: MovieId) -> QueryResult<MovieDetail> {
        let movie = self.catalog().movie(id)?.ok_or(QueryError::NotFound {
            entity: "movie",
            id: id.get(),
        })?;

        let mut languages = self.catalog().movie_languages(id)?;
        let mut genres = self.catalog().movie_genres(id)?;
        let mut actors = self.catalog().movie_people(id, Role::Actor)?;
        let mut directors = self.catalog().movie_people(id, Role::Director)?;

        sort_by_name(&mut languages, |l| (l.name.as_str(), l.id.get()));
        sort_by_name(&mut genres, |g| (g.name.as_str(), g.id.get()));
        sort_by_name(&mut actors, person_key);
        sort_by_name(&mut directors, person_key);

        Ok(MovieDetail {
            movie,
            languages,
            genres,
            actors,
            directors,
        })
    }

    pub fn get_person(&self, id: PersonId) -> QueryResult<Person> {
        self.catalog().person(id)?.ok_or(QueryError::NotFound {
            entity: "person",
            id: id.get(),
        })
    }

    /// All languages, ordered by name.
    pub fn languages(&self) -> QueryResult<Vec<Language>> {
        let mut languages = self.catalog().languages()?;
        sort_by_name(&mut languages, |l| (l.name.as_str(), l.id.get()));
        Ok(languages)
    }

    /// All genres, ordered by name.
    pub fn genres(&self) -> QueryResult<Vec<Genre>> {
        let mut genres = self.catalog().genres()?;
        sort_by_name(&mut genres, |g| (g.name.as_str(), g.id.get()));
        Ok(genres)
    }

    /// People credited as actor on at least one movie, ordered by name.
    pub fn actors(&self) -> QueryResult<Vec<Person>> {
        self.people_in_role(Role::Actor)
    }

    /// People credited as director on at least one movie, ordered by name.
    pub fn directors(&self) -> QueryResult<Vec<Person>> {
        self.people_in_role(Role::Director)
    }

    fn people_in_role(&self, role: Role) -> QueryResult<Vec<Person>> {
        let credited: BTreeSet<PersonId> = self
            .catalog()
            .links(LinkKind::from(role))?
            .into_iter()
            .map(|link| link.person())
            .collect();

        let mut people: Vec<Person> = self
            .catalog()
            .people()?
            .into_iter()
            .filter(|person| credited.contains(&person.id))
            .collect();
        sort_by_name(&mut people, person_key);
        Ok(people)
    }
}

fn person_key(person: &Person) -> (&str, i64) {
    (person.name.as_str(), person.id.get())
}

/// Order by name bytes, then id, so equal names stay deterministic.
fn sort_by_name<T>(items: &mut [T], key: impl Fn(&T) -> (&str, i64)) {
    items.sort_by(|a, b| {
        let (a_name, a_id) = key(a);
        let (b_name, b_id) = key(b);
        a_name
            .as_bytes()
            .cmp(b_name.as_bytes())
            .then(a_id.cmp(&b_id))
    });
}
