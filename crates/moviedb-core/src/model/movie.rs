use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ids::MovieId;
use crate::model::{Genre, Language, Person};

/// A stored movie record, without its associations.
///
/// Physical attributes describe the owned copy (disk count, region code,
/// media type) rather than the film itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub alttitle: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub description: String,

    /// Aspect ratio, e.g. "16:9".
    #[serde(default)]
    pub format: String,

    /// Runtime in minutes.
    #[serde(default)]
    pub length: i32,

    /// Region code as printed on the case ("0", "2", "B", ...).
    #[serde(default)]
    pub region: String,

    /// Content rating (minimum age).
    #[serde(default)]
    pub rating: i32,
    #[serde(default = "default_disks")]
    pub disks: i32,

    /// Personal score, 1 to 5; 0 when unscored.
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub picture: String,

    /// Media type: "DVD", "BluRay", ...
    #[serde(rename = "type", default)]
    pub media_type: String,

    /// When the movie was added to the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Movie {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: MovieId::default(),
            title: title.into(),
            alttitle: None,
            year: 0,
            description: String::new(),
            format: String::new(),
            length: 0,
            region: String::new(),
            rating: 0,
            disks: default_disks(),
            score: 0,
            picture: String::new(),
            media_type: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = MovieId::new(id);
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set media type, disk count and runtime in one go.
    #[must_use]
    pub fn with_media(mut self, media_type: impl Into<String>, disks: i32, length: i32) -> Self {
        self.media_type = media_type.into();
        self.disks = disks;
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Reject records the catalog cannot store meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidData("movie title is empty".to_string()));
        }
        if !(0..=5).contains(&self.score) {
            return Err(Error::InvalidData(format!(
                "score {} of \"{}\" is outside 1 to 5",
                self.score, self.title
            )));
        }
        if self.disks < 0 || self.length < 0 {
            return Err(Error::InvalidData(format!(
                "\"{}\" has a negative disk count or length",
                self.title
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            year: self.year,
            score: self.score,
            rating: self.rating,
        }
    }
}

const fn default_disks() -> i32 {
    1
}

/// The row shape returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub score: i32,
    pub rating: i32,
}

/// A movie together with its resolved associations, each ordered by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub actors: Vec<Person>,
    #[serde(default)]
    pub directors: Vec<Person>,
}

impl MovieDetail {
    #[must_use]
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            languages: Vec::new(),
            genres: Vec::new(),
            actors: Vec::new(),
            directors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_languages(mut self, names: &[&str]) -> Self {
        self.languages = names.iter().map(|n| Language::new(*n)).collect();
        self
    }

    #[must_use]
    pub fn with_genres(mut self, names: &[&str]) -> Self {
        self.genres = names.iter().map(|n| Genre::new(*n)).collect();
        self
    }

    #[must_use]
    pub fn with_actors(mut self, names: &[&str]) -> Self {
        self.actors = names.iter().map(|n| Person::new(*n)).collect();
        self
    }

    #[must_use]
    pub fn with_directors(mut self, names: &[&str]) -> Self {
        self.directors = names.iter().map(|n| Person::new(*n)).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_builder() {
        let movie = Movie::new("Argo")
            .with_id(914)
            .with_year(2012)
            .with_score(5)
            .with_rating(12)
            .with_media("BluRay", 1, 129);

        assert_eq!(movie.id, MovieId::new(914));
        assert_eq!(movie.media_type, "BluRay");
        assert_eq!(movie.length, 129);
    }

    #[test]
    fn test_summary_json_shape() {
        let movie = Movie::new("The Town")
            .with_id(647)
            .with_year(2010)
            .with_score(4)
            .with_rating(16);

        let json = serde_json::to_string(&movie.summary()).unwrap();
        assert_eq!(
            json,
            r#"{"id":647,"title":"The Town","year":2010,"score":4,"rating":16}"#
        );
    }

    #[test]
    fn test_detail_flattens_movie_fields() {
        let detail = MovieDetail::new(Movie::new("Argo").with_media("BluRay", 1, 129))
            .with_genres(&["Drama"]);

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "Argo");
        assert_eq!(value["type"], "BluRay");
        assert_eq!(value["genres"][0]["name"], "Drama");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_detail_deserializes_without_ids() {
        let detail: MovieDetail = serde_json::from_str(
            r#"{"title":"Super Testfilm","year":2039,"type":"BluRay",
                "actors":[{"name":"Brad Pitt"}],"languages":[{"name":"Deutsch"}]}"#,
        )
        .unwrap();

        assert!(detail.movie.id.is_unassigned());
        assert_eq!(detail.actors[0].name, "Brad Pitt");
        assert_eq!(detail.languages[0].country, "");
    }

    #[test]
    fn test_missing_disks_default_to_one() {
        let detail: MovieDetail = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(detail.movie.disks, 1);
        assert_eq!(detail.movie.disks, Movie::new("x").disks);
    }

    #[test]
    fn test_validate() {
        assert!(Movie::new("Argo").with_score(5).validate().is_ok());
        assert!(Movie::new("Unscored").validate().is_ok());

        for movie in [
            Movie::new("   "),
            Movie::new("Argo").with_score(6),
            Movie::new("Argo").with_score(-1),
            Movie::new("Argo").with_media("DVD", -1, 120),
        ] {
            assert!(matches!(movie.validate(), Err(Error::InvalidData(_))));
        }
    }
}
