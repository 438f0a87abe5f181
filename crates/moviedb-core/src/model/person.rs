use serde::{Deserialize, Serialize};

use crate::model::ids::PersonId;

/// The role a person plays on a movie.
///
/// There is no role entity: the role is whichever association a person
/// is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
}

/// A person credited on one or more movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: PersonId,
    pub name: String,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PersonId::default(),
            name: name.into(),
        }
    }
}
