//! A small, hand-checked catalog shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use moviedb_core::model::{
    Genre, GenreId, Language, LanguageId, Movie, MovieDetail, MovieSummary, Person, PersonId,
};
use moviedb_core::schema::Database;

pub fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

fn genre(id: i64, name: &str) -> Genre {
    Genre {
        id: GenreId::new(id),
        name: name.to_string(),
    }
}

fn language(id: i64, name: &str) -> Language {
    Language {
        id: LanguageId::new(id),
        name: name.to_string(),
        country: String::new(),
        native_name: String::new(),
    }
}

fn person(id: i64, name: &str) -> Person {
    Person {
        id: PersonId::new(id),
        name: name.to_string(),
    }
}

pub fn deutsch() -> Language {
    language(1, "Deutsch").with_origin("Schweiz", "Deutsch")
}

pub fn englisch() -> Language {
    language(2, "Englisch").with_origin("USA", "English")
}

pub fn franzoesisch() -> Language {
    language(3, "Französisch").with_origin("Frankreich", "Français")
}

pub fn spanisch() -> Language {
    language(4, "Spanisch").with_origin("Spanien", "Español")
}

pub const THRILLER: (i64, &str) = (4, "Thriller");
pub const COMEDY: (i64, &str) = (5, "Comedy");
pub const DRAMA: (i64, &str) = (6, "Drama");
pub const ACTION: (i64, &str) = (9, "Action");
pub const HORROR: (i64, &str) = (3, "Horror");
pub const BIOGRAPHY: (i64, &str) = (27, "Biography");
pub const HISTORY: (i64, &str) = (28, "History");
pub const CRIME: (i64, &str) = (80, "Crime");

pub const BEN_AFFLECK: (i64, &str) = (331, "Ben Affleck");
pub const BRAD_PITT: (i64, &str) = (7, "Brad Pitt");
pub const BUD_SPENCER: (i64, &str) = (483, "Bud Spencer");
pub const DAVID_FINCHER: (i64, &str) = (11, "David Fincher");
pub const JEREMY_RENNER: (i64, &str) = (2145, "Jeremy Renner");

struct Entry {
    movie: Movie,
    languages: Vec<Language>,
    genres: &'static [(i64, &'static str)],
    actors: &'static [(i64, &'static str)],
    directors: &'static [(i64, &'static str)],
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: i64,
    title: &str,
    year: i32,
    score: i32,
    rating: i32,
    region: &str,
    media: (&str, i32, i32),
    created: &str,
) -> Movie {
    Movie::new(title)
        .with_id(id)
        .with_year(year)
        .with_score(score)
        .with_rating(rating)
        .with_region(region)
        .with_media(media.0, media.1, media.2)
        .with_created_at(ts(created))
}

fn entries() -> Vec<Entry> {
    let de_en = || vec![deutsch(), englisch()];
    vec![
        Entry {
            movie: movie(
                1,
                "Face/Off",
                1997,
                5,
                16,
                "2",
                ("DVD", 1, 133),
                "2010-01-05T00:13:37Z",
            ),
            languages: de_en(),
            genres: &[ACTION, THRILLER],
            actors: &[(101, "Nicolas Cage"), (102, "John Travolta")],
            directors: &[(201, "John Woo")],
        },
        Entry {
            movie: movie(
                7,
                "Fight Club",
                1999,
                5,
                18,
                "2",
                ("DVD", 2, 139),
                "2010-01-05T20:00:00Z",
            ),
            languages: de_en(),
            genres: &[DRAMA, THRILLER],
            actors: &[BRAD_PITT, (8, "Edward Norton")],
            directors: &[DAVID_FINCHER],
        },
        Entry {
            movie: movie(
                135,
                "James Bond 007:<br/>On her Majesty's Secret Service",
                1969,
                2,
                16,
                "2",
                ("DVD", 1, 142),
                "2010-02-10T12:00:00Z",
            ),
            languages: de_en(),
            genres: &[ACTION],
            actors: &[(369, "Desmond Llewelyn"), (370, "Diana Rigg")],
            directors: &[(371, "Peter R. Hunt")],
        },
        Entry {
            movie: movie(
                151,
                "Zwei sind nicht zu bremsen",
                1978,
                3,
                12,
                "2",
                ("DVD", 1, 95),
                "2010-03-01T09:00:00Z",
            ),
            languages: vec![deutsch()],
            genres: &[COMEDY],
            actors: &[BUD_SPENCER, (484, "Terence Hill")],
            directors: &[(485, "Sergio Corbucci")],
        },
        Entry {
            movie: movie(
                283,
                "Sie nannten ihn Mücke",
                1978,
                3,
                12,
                "2",
                ("DVD", 1, 90),
                "2010-03-01T10:00:00Z",
            ),
            languages: vec![deutsch()],
            genres: &[COMEDY],
            actors: &[BUD_SPENCER],
            directors: &[(486, "Ferdinando Baldi")],
        },
        Entry {
            movie: movie(
                400,
                "Gone Baby Gone",
                2007,
                4,
                16,
                "1",
                ("DVD", 1, 114),
                "2011-06-15T18:30:00Z",
            ),
            languages: vec![englisch()],
            genres: &[CRIME, DRAMA],
            actors: &[(332, "Casey Affleck"), (333, "Ed Harris")],
            directors: &[BEN_AFFLECK],
        },
        Entry {
            movie: movie(
                647,
                "The Town",
                2010,
                4,
                16,
                "B",
                ("BluRay", 1, 125),
                "2011-06-15T19:00:00Z",
            ),
            languages: de_en(),
            genres: &[CRIME, DRAMA, THRILLER],
            actors: &[BEN_AFFLECK, JEREMY_RENNER, (2146, "Jon Hamm")],
            directors: &[BEN_AFFLECK],
        },
        Entry {
            movie: movie(
                856,
                "House of Cards (1)",
                2013,
                4,
                16,
                "B",
                ("BluRay", 4, 650),
                "2013-11-20T08:00:00Z",
            ),
            languages: vec![englisch()],
            genres: &[DRAMA],
            actors: &[(2200, "Kevin Spacey"), (2201, "Robin Wright")],
            directors: &[DAVID_FINCHER],
        },
        Entry {
            movie: movie(
                857,
                "Gravity",
                2013,
                5,
                12,
                "B",
                ("BluRay", 1, 91),
                "2013-12-24T10:00:00Z",
            ),
            languages: de_en(),
            genres: &[THRILLER],
            actors: &[(2300, "Sandra Bullock"), (220, "George Clooney")],
            directors: &[(2301, "Alfonso Cuarón")],
        },
        Entry {
            movie: movie(
                858,
                "Iron Man 3",
                2013,
                4,
                12,
                "B",
                ("BluRay", 1, 130),
                "2013-12-24T11:00:00Z",
            ),
            languages: de_en(),
            genres: &[ACTION],
            actors: &[(2400, "Robert Downey Jr.")],
            directors: &[(2401, "Shane Black")],
        },
        Entry {
            movie: movie(
                867,
                "Kick-Ass 2",
                2013,
                3,
                18,
                "B",
                ("BluRay", 1, 103),
                "2014-01-01T17:00:00Z",
            ),
            languages: vec![deutsch(), franzoesisch()],
            genres: &[ACTION, COMEDY],
            actors: &[(2500, "Aaron Taylor-Johnson"), (2501, "Chloë Grace Moretz")],
            directors: &[(2502, "Jeff Wadlow")],
        },
        Entry {
            movie: movie(
                893,
                "World War Z",
                2013,
                3,
                16,
                "B",
                ("BluRay", 1, 116),
                "2014-01-01T17:11:36Z",
            ),
            languages: vec![deutsch(), englisch(), franzoesisch()],
            genres: &[ACTION, HORROR],
            actors: &[BRAD_PITT],
            directors: &[(2600, "Marc Forster")],
        },
        Entry {
            movie: movie(
                914,
                "Argo",
                2012,
                5,
                12,
                "B",
                ("BluRay", 1, 129),
                "2013-05-01T20:00:00Z",
            ),
            languages: vec![deutsch(), englisch(), franzoesisch(), spanisch()],
            genres: &[THRILLER, DRAMA, HISTORY, BIOGRAPHY],
            actors: &[
                (942, "John Goodman"),
                BEN_AFFLECK,
                (5310, "Alan Arkin"),
                (3470, "Bryan Cranston"),
            ],
            directors: &[BEN_AFFLECK],
        },
    ]
}

/// Ids of every fixture movie, ascending.
pub const ALL_IDS: [i64; 13] = [1, 7, 135, 151, 283, 400, 647, 856, 857, 858, 867, 893, 914];

/// An in-memory catalog holding the fixture corpus.
pub fn fixture_catalog() -> Database {
    let db = Database::open_in_memory().unwrap();
    for entry in entries() {
        let detail = MovieDetail {
            movie: entry.movie,
            languages: entry.languages,
            genres: entry.genres.iter().map(|(id, name)| genre(*id, name)).collect(),
            actors: entry.actors.iter().map(|(id, name)| person(*id, name)).collect(),
            directors: entry.directors.iter().map(|(id, name)| person(*id, name)).collect(),
        };
        db.insert_movie(&detail).unwrap();
    }
    db
}

pub fn ids(listing: &[MovieSummary]) -> Vec<i64> {
    listing.iter().map(|m| m.id.get()).collect()
}
