//! The listing query engine: filter, order and summarize movies.

use std::cmp::Ordering;
use std::collections::HashSet;

use moviedb_core::model::{Movie, MovieId, MovieSummary};
use moviedb_core::CatalogRepository;

use crate::error::QueryResult;
use crate::options::{Criterion, Direction, FilterField, ListingOptions, SortField, SortKey};

/// Produces ordered movie summaries for a set of [`ListingOptions`].
///
/// The engine holds no state besides its catalog handle; one instance can
/// serve any number of requests.
#[derive(Debug, Clone)]
pub struct ListingEngine<R> {
    catalog: R,
}

impl<R: CatalogRepository> ListingEngine<R> {
    pub const fn new(catalog: R) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &R {
        &self.catalog
    }

    /// Return every movie satisfying all criteria, ordered by the sort keys
    /// in precedence order and finally by ascending id.
    pub fn list(&self, options: &ListingOptions) -> QueryResult<Vec<MovieSummary>> {
        log::debug!(
            "Listing movies: {} sort keys, {} criteria",
            options.sort.len(),
            options.filters.len()
        );

        let linked = self.resolve_links(&options.filters)?;
        let mut movies: Vec<Movie> = self
            .catalog
            .movies()?
            .into_iter()
            .filter(|movie| {
                options
                    .filters
                    .iter()
                    .zip(&linked)
                    .all(|(criterion, ids)| satisfies(movie, criterion, ids.as_ref()))
            })
            .collect();

        movies.sort_by(|a, b| compare(a, b, &options.sort));

        log::debug!("Listing matched {} movies", movies.len());
        Ok(movies.iter().map(Movie::summary).collect())
    }

    /// For each association criterion, the set of movies linked to its value.
    fn resolve_links(&self, filters: &[Criterion]) -> QueryResult<Vec<Option<HashSet<MovieId>>>> {
        filters
            .iter()
            .map(|criterion| -> QueryResult<Option<HashSet<MovieId>>> {
                match criterion.field.link_kind() {
                    Some(kind) => {
                        let ids = self.catalog.linked_movies(kind, criterion.value)?;
                        Ok(Some(ids.into_iter().collect()))
                    }
                    None => Ok(None),
                }
            })
            .collect()
    }
}

fn satisfies(movie: &Movie, criterion: &Criterion, linked: Option<&HashSet<MovieId>>) -> bool {
    match criterion.field {
        FilterField::Year => i64::from(movie.year) == criterion.value,
        FilterField::Score => i64::from(movie.score) == criterion.value,
        FilterField::Rating => i64::from(movie.rating) == criterion.value,
        FilterField::Language | FilterField::Genre | FilterField::Actor | FilterField::Director => {
            linked.is_some_and(|ids| ids.contains(&movie.id))
        }
    }
}

/// Total order: explicit keys first, then id ascending.
fn compare(a: &Movie, b: &Movie, keys: &[SortKey]) -> Ordering {
    keys.iter()
        .map(|key| {
            let ordering = compare_field(a, b, key.field);
            match key.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

fn compare_field(a: &Movie, b: &Movie, field: SortField) -> Ordering {
    match field {
        // Byte order of the stored text, like SQLite's BINARY collation.
        SortField::Title => a.title.as_bytes().cmp(b.title.as_bytes()),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Score => a.score.cmp(&b.score),
        SortField::Rating => a.rating.cmp(&b.rating),
        SortField::Length => a.length.cmp(&b.length),
        SortField::Id => a.id.cmp(&b.id),
    }
}
