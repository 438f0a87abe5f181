//! Counting helpers with deterministic ordering.

use std::collections::{BTreeMap, HashMap};

use moviedb_core::model::{Link, Person, PersonId};

use super::snapshot::{LabelCount, RankedPerson};

/// Running credit count per person.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    counts: HashMap<PersonId, i64>,
}

impl Tally {
    pub(crate) fn add_links<'a>(&mut self, links: impl IntoIterator<Item = &'a Link>) {
        for link in links {
            *self.counts.entry(link.person()).or_insert(0) += 1;
        }
    }

    /// Number of distinct people counted.
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    /// The `n` highest counts, ties broken by ascending person id.
    pub(crate) fn top(&self, n: usize, names: &HashMap<PersonId, &str>) -> Vec<RankedPerson> {
        let mut ranked: Vec<(PersonId, i64)> =
            self.counts.iter().map(|(id, c)| (*id, *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(n)
            .map(|(id, count)| RankedPerson {
                id,
                name: names.get(&id).copied().unwrap_or_default().to_string(),
                count,
            })
            .collect()
    }
}

pub(crate) fn name_index(people: &[Person]) -> HashMap<PersonId, &str> {
    people.iter().map(|p| (p.id, p.name.as_str())).collect()
}

/// Count occurrences of each label; most frequent first, ties by label.
pub(crate) fn label_counts<I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut rows: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    // Stable sort keeps the BTreeMap's label order among equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
