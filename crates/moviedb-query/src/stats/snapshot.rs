use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use moviedb_core::model::PersonId;

/// Totals for one observed media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTypeRollup {
    #[serde(rename = "type")]
    pub media_type: String,
    pub disks: i64,
    pub length: i64,
    pub count: i64,
}

/// A person with their number of credits in the ranked role(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPerson {
    pub id: PersonId,
    pub name: String,
    pub count: i64,
}

/// Number of movies carrying one raw field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    #[serde(rename = "type")]
    pub label: String,
    pub count: i64,
}

/// Number of movies acquired on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Point-in-time rollups over the whole catalog.
///
/// Recomputed per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub ground_zero: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    pub count: i64,
    pub movie_types: Vec<MediaTypeRollup>,

    pub actors: i64,
    pub directors: i64,
    pub people_total: i64,
    pub top5_actors: Vec<RankedPerson>,
    pub top5_directors: Vec<RankedPerson>,
    pub top5_actors_and_directors: Vec<RankedPerson>,

    pub regions: Vec<LabelCount>,
    pub ratings: Vec<LabelCount>,
    pub scores: Vec<LabelCount>,

    pub dvd_movies: i64,
    pub bluray_movies: i64,
    pub dvd_disks: i64,
    pub bluray_disks: i64,
    pub total_length: i64,
    pub avg_length_per_movie: i64,
    pub avg_length_per_disk: i64,

    /// 0.0 when the collection spans no time or is empty.
    pub avg_movies_per_day: f64,
    /// When the next acquisition is expected; `None` when no rate is known.
    pub new_movies_estimate: Option<DateTime<Utc>>,
}

impl StatisticsSnapshot {
    /// The rollup for a media type label, if that type was observed.
    #[must_use]
    pub fn movie_type(&self, media_type: &str) -> Option<&MediaTypeRollup> {
        self.movie_types
            .iter()
            .find(|rollup| rollup.media_type == media_type)
    }
}

/// Truncating division; a zero divisor yields 0.
pub(crate) fn checked_average(total: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        0
    } else {
        total / divisor
    }
}
