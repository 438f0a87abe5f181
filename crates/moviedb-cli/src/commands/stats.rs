use anyhow::Result;
use moviedb_core::schema::Database;
use moviedb_query::StatisticsAggregator;

use super::emit;

pub fn show_statistics(db: &Database, pretty: bool) -> Result<()> {
    let snapshot = StatisticsAggregator::new(db).snapshot()?;
    emit(&snapshot, pretty)
}

/// Acquisitions per calendar day.
pub fn show_date_counts(db: &Database, pretty: bool) -> Result<()> {
    let days = StatisticsAggregator::new(db).date_counts()?;
    emit(&days, pretty)
}
