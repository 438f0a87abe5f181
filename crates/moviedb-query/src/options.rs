//! Parsing of listing request parameters into [`ListingOptions`].
//!
//! Parameters arrive as repeatable pairs matched by position:
//! `sort`/`by` for ordering and `query`/`value` for filtering. Parsing is
//! best effort; anything unrecognized or unpaired is dropped.

use moviedb_core::model::LinkKind;
use std::fmt;

/// Sort direction of a single key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Anything other than `desc`/`descending` reads as ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Fields a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Title,
    Year,
    Score,
    Rating,
    Length,
    Id,
}

impl SortField {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "year" => Some(Self::Year),
            "score" => Some(Self::Score),
            "rating" => Some(Self::Rating),
            "length" => Some(Self::Length),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Score => "score",
            Self::Rating => "rating",
            Self::Length => "length",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordering key: field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

/// Fields a listing can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Year,
    Score,
    Rating,
    Language,
    Genre,
    Actor,
    Director,
}

impl FilterField {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "year" => Some(Self::Year),
            "score" => Some(Self::Score),
            "rating" => Some(Self::Rating),
            "language" => Some(Self::Language),
            "genre" => Some(Self::Genre),
            "actor" => Some(Self::Actor),
            "director" => Some(Self::Director),
            _ => None,
        }
    }

    /// The association consulted for this field; `None` for scalar fields.
    #[must_use]
    pub const fn link_kind(self) -> Option<LinkKind> {
        match self {
            Self::Year | Self::Score | Self::Rating => None,
            Self::Language => Some(LinkKind::Language),
            Self::Genre => Some(LinkKind::Genre),
            Self::Actor => Some(LinkKind::Actor),
            Self::Director => Some(LinkKind::Director),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Score => "score",
            Self::Rating => "rating",
            Self::Language => "language",
            Self::Genre => "genre",
            Self::Actor => "actor",
            Self::Director => "director",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One equality test. Scalar fields compare the stored value, association
/// fields compare the referenced id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Criterion {
    pub field: FilterField,
    pub value: i64,
}

/// Structured sort and filter intent of a listing request.
///
/// `sort` is in precedence order. `filters` are AND-ed; their order carries
/// no meaning but is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub sort: Vec<SortKey>,
    pub filters: Vec<Criterion>,
}

impl ListingOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort_by(mut self, field: SortField, direction: Direction) -> Self {
        self.sort.push(SortKey { field, direction });
        self
    }

    #[must_use]
    pub fn filter(mut self, field: FilterField, value: i64) -> Self {
        self.filters.push(Criterion { field, value });
        self
    }

    /// Build options from an ordered, multi-valued parameter list.
    ///
    /// The i-th `sort` pairs with the i-th `by` and the i-th `query` with the
    /// i-th `value`. Other parameter names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut sorts = Vec::new();
        let mut bys = Vec::new();
        let mut queries = Vec::new();
        let mut values = Vec::new();

        for (key, value) in pairs {
            let value = value.as_ref().to_string();
            match key.as_ref() {
                "sort" => sorts.push(value),
                "by" => bys.push(value),
                "query" => queries.push(value),
                "value" => values.push(value),
                other => log::debug!("Ignoring listing parameter {:?}", other),
            }
        }

        let mut options = Self::new();

        for (i, raw_field) in sorts.iter().enumerate() {
            let direction = bys.get(i).map(|by| Direction::parse(by)).unwrap_or_default();
            match SortField::parse(raw_field) {
                Some(field) => options.sort.push(SortKey { field, direction }),
                None => log::warn!("Dropping unknown sort field {:?}", raw_field),
            }
        }
        if bys.len() > sorts.len() {
            log::debug!("Ignoring {} unpaired `by` values", bys.len() - sorts.len());
        }

        for (i, raw_field) in queries.iter().enumerate() {
            let Some(field) = FilterField::parse(raw_field) else {
                log::warn!("Dropping unknown filter field {:?}", raw_field);
                continue;
            };
            let Some(raw_value) = values.get(i) else {
                log::warn!("Dropping filter on {} without a value", field);
                continue;
            };
            match raw_value.trim().parse::<i64>() {
                Ok(value) => options.filters.push(Criterion { field, value }),
                Err(_) => log::warn!("Dropping filter {}={:?}: not an integer", field, raw_value),
            }
        }

        options
    }

    /// Build options from a URL query string such as
    /// `sort=year&by=desc&sort=title&by=desc`.
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_keys() {
        let options = ListingOptions::from_query_str("");
        assert!(options.sort.is_empty());
        assert!(options.filters.is_empty());
    }

    #[test]
    fn test_repeated_sort_pairs_keep_precedence() {
        let options = ListingOptions::from_query_str("sort=year&by=desc&sort=title&by=desc");
        assert_eq!(
            options.sort,
            vec![
                SortKey {
                    field: SortField::Year,
                    direction: Direction::Descending
                },
                SortKey {
                    field: SortField::Title,
                    direction: Direction::Descending
                },
            ]
        );
    }

    #[test]
    fn test_missing_direction_defaults_to_ascending() {
        let options = ListingOptions::from_query_str("sort=year&by=desc&sort=title");
        assert_eq!(options.sort[1].direction, Direction::Ascending);
    }

    #[test]
    fn test_unknown_direction_defaults_to_ascending() {
        let options = ListingOptions::from_query_str("sort=title&by=sideways");
        assert_eq!(options.sort[0].direction, Direction::Ascending);
    }

    #[test]
    fn test_unknown_sort_field_consumes_its_direction() {
        let options = ListingOptions::from_query_str("sort=colour&by=desc&sort=title&by=asc");
        assert_eq!(
            options.sort,
            vec![SortKey {
                field: SortField::Title,
                direction: Direction::Ascending
            }]
        );
    }

    #[test]
    fn test_unpaired_by_is_ignored() {
        let options = ListingOptions::from_query_str("by=desc");
        assert!(options.sort.is_empty());
    }

    #[test]
    fn test_filters_pair_by_position() {
        let options =
            ListingOptions::from_query_str("query=director&value=331&query=actor&value=2145");
        assert_eq!(
            options.filters,
            vec![
                Criterion {
                    field: FilterField::Director,
                    value: 331
                },
                Criterion {
                    field: FilterField::Actor,
                    value: 2145
                },
            ]
        );
    }

    #[test]
    fn test_repeated_filter_field_yields_two_criteria() {
        let options = ListingOptions::from_query_str("query=genre&value=6&query=genre&value=4");
        assert_eq!(options.filters.len(), 2);
        assert!(options.filters.iter().all(|c| c.field == FilterField::Genre));
    }

    #[test]
    fn test_malformed_filters_are_dropped() {
        let options = ListingOptions::from_query_str(
            "query=year&value=abc&query=colour&value=3&query=score&value=4&query=rating",
        );
        assert_eq!(
            options.filters,
            vec![Criterion {
                field: FilterField::Score,
                value: 4
            }]
        );
    }

    #[test]
    fn test_names_are_case_insensitive_and_decoded() {
        let options =
            ListingOptions::from_query_str("?sort=%20Title&by=DESC&query=Year&value=+2013");
        assert_eq!(options.sort[0].field, SortField::Title);
        assert_eq!(options.sort[0].direction, Direction::Descending);
        assert_eq!(options.filters[0].value, 2013);
    }

    #[test]
    fn test_from_pairs_matches_builder() {
        let parsed = ListingOptions::from_pairs([
            ("sort", "score"),
            ("by", "desc"),
            ("query", "genre"),
            ("value", "9"),
        ]);
        let built = ListingOptions::new()
            .sort_by(SortField::Score, Direction::Descending)
            .filter(FilterField::Genre, 9);
        assert_eq!(parsed, built);
    }

    #[test]
    fn test_link_kinds() {
        assert_eq!(FilterField::Year.link_kind(), None);
        assert_eq!(FilterField::Actor.link_kind(), Some(LinkKind::Actor));
    }
}
