use serde::{Deserialize, Serialize};

use crate::model::ids::LanguageId;

/// An audio language available on a movie's disks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub id: LanguageId,
    pub name: String,
    #[serde(default)]
    pub country: String,

    /// The language's name in itself, e.g. "Español".
    #[serde(default)]
    pub native_name: String,
}

impl Language {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LanguageId::default(),
            name: name.into(),
            country: String::new(),
            native_name: String::new(),
        }
    }

    #[must_use]
    pub fn with_origin(
        mut self,
        country: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        self.country = country.into();
        self.native_name = native_name.into();
        self
    }
}
