//! The statistics aggregator: corpus-wide rollups for reporting.

mod ranking;
mod snapshot;

pub use snapshot::{DateCount, LabelCount, MediaTypeRollup, RankedPerson, StatisticsSnapshot};

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use moviedb_core::model::{LinkKind, Movie};
use moviedb_core::CatalogRepository;

use crate::error::QueryResult;
use ranking::{label_counts, name_index, Tally};
use snapshot::checked_average;

/// Size of every top-N ranking in a snapshot.
pub const TOP_N: usize = 5;

const DVD: &str = "DVD";
const BLURAY: &str = "BluRay";
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Computes [`StatisticsSnapshot`]s from a catalog.
#[derive(Debug, Clone)]
pub struct StatisticsAggregator<R> {
    catalog: R,
}

impl<R: CatalogRepository> StatisticsAggregator<R> {
    pub const fn new(catalog: R) -> Self {
        Self { catalog }
    }

    /// Compute every rollup from the current corpus.
    pub fn snapshot(&self) -> QueryResult<StatisticsSnapshot> {
        let movies = self.catalog.movies()?;
        let actor_links = self.catalog.links(LinkKind::Actor)?;
        let director_links = self.catalog.links(LinkKind::Director)?;
        let people = self.catalog.people()?;
        let names = name_index(&people);

        let (ground_zero, last_update) = self.corpus_span(&movies)?;
        let count = movies.len() as i64;

        let movie_types = media_type_rollups(&movies);
        let rollup = |media_type: &str| movie_types.iter().find(|r| r.media_type == media_type);
        let (dvd_movies, dvd_disks) = rollup(DVD).map_or((0, 0), |r| (r.count, r.disks));
        let (bluray_movies, bluray_disks) = rollup(BLURAY).map_or((0, 0), |r| (r.count, r.disks));

        let mut actors = Tally::default();
        actors.add_links(&actor_links);
        let mut directors = Tally::default();
        directors.add_links(&director_links);
        let mut combined = Tally::default();
        combined.add_links(actor_links.iter().chain(&director_links));

        let total_length: i64 = movies.iter().map(|m| i64::from(m.length)).sum();
        let total_disks: i64 = movies.iter().map(|m| i64::from(m.disks)).sum();

        let (avg_movies_per_day, new_movies_estimate) =
            acquisition_rate(count, ground_zero, last_update);

        let snapshot = StatisticsSnapshot {
            ground_zero,
            last_update,
            count,
            actors: actors.len() as i64,
            directors: directors.len() as i64,
            people_total: combined.len() as i64,
            top5_actors: actors.top(TOP_N, &names),
            top5_directors: directors.top(TOP_N, &names),
            top5_actors_and_directors: combined.top(TOP_N, &names),
            regions: label_counts(movies.iter().map(|m| m.region.clone())),
            ratings: label_counts(movies.iter().map(|m| m.rating.to_string())),
            scores: label_counts(movies.iter().map(|m| m.score.to_string())),
            dvd_movies,
            bluray_movies,
            dvd_disks,
            bluray_disks,
            total_length,
            avg_length_per_movie: checked_average(total_length, count),
            avg_length_per_disk: checked_average(total_length, total_disks),
            avg_movies_per_day,
            new_movies_estimate,
            movie_types,
        };

        log::debug!(
            "Computed statistics over {} movies and {} people",
            snapshot.count,
            snapshot.people_total
        );
        Ok(snapshot)
    }

    /// Movies acquired per calendar day (UTC), oldest day first.
    ///
    /// Movies without an acquisition timestamp are left out.
    pub fn date_counts(&self) -> QueryResult<Vec<DateCount>> {
        let mut days = BTreeMap::new();
        for movie in self.catalog.movies()? {
            if let Some(at) = movie.created_at {
                *days.entry(at.date_naive()).or_insert(0) += 1;
            }
        }
        Ok(days
            .into_iter()
            .map(|(date, count)| DateCount { date, count })
            .collect())
    }

    /// Earliest and latest corpus timestamps, falling back to catalog
    /// metadata where the records carry none.
    fn corpus_span(
        &self,
        movies: &[Movie],
    ) -> QueryResult<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
        let ground_zero = movies.iter().filter_map(|m| m.created_at).min();
        let last_update = movies
            .iter()
            .flat_map(|m| [m.created_at, m.updated_at])
            .flatten()
            .max();

        if ground_zero.is_some() && last_update.is_some() {
            return Ok((ground_zero, last_update));
        }

        let info = self.catalog.catalog_info()?;
        Ok((
            ground_zero.or(info.ground_zero),
            last_update.or(info.last_update),
        ))
    }
}

/// One rollup per observed media type, most movies first.
fn media_type_rollups(movies: &[Movie]) -> Vec<MediaTypeRollup> {
    let mut by_type: BTreeMap<&str, MediaTypeRollup> = BTreeMap::new();
    for movie in movies {
        let rollup = by_type
            .entry(movie.media_type.as_str())
            .or_insert_with(|| MediaTypeRollup {
                media_type: movie.media_type.clone(),
                disks: 0,
                length: 0,
                count: 0,
            });
        rollup.disks += i64::from(movie.disks);
        rollup.length += i64::from(movie.length);
        rollup.count += 1;
    }

    let mut rollups: Vec<MediaTypeRollup> = by_type.into_values().collect();
    rollups.sort_by(|a, b| b.count.cmp(&a.count));
    rollups
}

/// Average acquisitions per day over the corpus span and the projected time
/// of the next one. Degenerate spans yield `(0.0, None)`.
fn acquisition_rate(
    count: i64,
    ground_zero: Option<DateTime<Utc>>,
    last_update: Option<DateTime<Utc>>,
) -> (f64, Option<DateTime<Utc>>) {
    let (Some(start), Some(end)) = (ground_zero, last_update) else {
        return (0.0, None);
    };
    let elapsed_days = (end - start).num_seconds() as f64 / SECONDS_PER_DAY;
    if count <= 0 || elapsed_days <= 0.0 {
        return (0.0, None);
    }

    let per_day = count as f64 / elapsed_days;
    let next = TimeDelta::try_seconds((SECONDS_PER_DAY / per_day).round() as i64)
        .and_then(|gap| end.checked_add_signed(gap));
    (per_day, next)
}
