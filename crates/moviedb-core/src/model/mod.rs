pub mod genre;
pub mod ids;
pub mod language;
pub mod link;
pub mod movie;
pub mod person;

pub use genre::Genre;
pub use ids::{GenreId, LanguageId, MovieId, PersonId};
pub use language::Language;
pub use link::{Link, LinkKind};
pub use movie::{Movie, MovieDetail, MovieSummary};
pub use person::{Person, Role};
