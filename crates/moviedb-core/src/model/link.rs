use serde::{Deserialize, Serialize};

use crate::model::ids::{MovieId, PersonId};
use crate::model::Role;

/// One of the four many-to-many associations hanging off a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Language,
    Genre,
    Actor,
    Director,
}

impl LinkKind {
    pub const ALL: [Self; 4] = [Self::Language, Self::Genre, Self::Actor, Self::Director];

    /// The junction table backing this association.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Language => "movie_languages",
            Self::Genre => "movie_genres",
            Self::Actor => "movie_actors",
            Self::Director => "movie_directors",
        }
    }

    /// The junction column referencing the associated entity.
    #[must_use]
    pub const fn target_column(self) -> &'static str {
        match self {
            Self::Language => "language_id",
            Self::Genre => "genre_id",
            Self::Actor | Self::Director => "person_id",
        }
    }
}

impl From<Role> for LinkKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Actor => Self::Actor,
            Role::Director => Self::Director,
        }
    }
}

/// A single association row: `movie` is linked to entity `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub movie: MovieId,
    pub target: i64,
}

impl Link {
    /// The target read as a person id (meaningful for actor/director links).
    #[must_use]
    pub const fn person(self) -> PersonId {
        PersonId::new(self.target)
    }
}
