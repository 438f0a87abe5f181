use serde::{Deserialize, Serialize};

use crate::model::ids::GenreId;

/// A genre classification ("Drama", "Thriller", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GenreId::default(),
            name: name.into(),
        }
    }
}
