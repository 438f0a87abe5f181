/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r#"
-- Movies: one row per owned copy
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    alttitle TEXT,
    year INTEGER NOT NULL DEFAULT 0,
    description TEXT NOT NULL DEFAULT '',
    format TEXT NOT NULL DEFAULT '',
    length INTEGER NOT NULL DEFAULT 0,
    region TEXT NOT NULL DEFAULT '',
    rating INTEGER NOT NULL DEFAULT 0,
    disks INTEGER NOT NULL DEFAULT 1,
    score INTEGER NOT NULL DEFAULT 0,
    picture TEXT NOT NULL DEFAULT '',
    type TEXT NOT NULL DEFAULT '',
    created_at TEXT,
    updated_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_movies_year ON movies(year);
CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);

CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS genres (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS languages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    country TEXT NOT NULL DEFAULT '',
    native_name TEXT NOT NULL DEFAULT ''
);

-- Associations (many-to-many)
CREATE TABLE IF NOT EXISTS movie_languages (
    movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
    language_id INTEGER NOT NULL REFERENCES languages(id),
    PRIMARY KEY (movie_id, language_id)
);

CREATE TABLE IF NOT EXISTS movie_genres (
    movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
    genre_id INTEGER NOT NULL REFERENCES genres(id),
    PRIMARY KEY (movie_id, genre_id)
);

CREATE TABLE IF NOT EXISTS movie_actors (
    movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
    person_id INTEGER NOT NULL REFERENCES people(id),
    PRIMARY KEY (movie_id, person_id)
);

CREATE TABLE IF NOT EXISTS movie_directors (
    movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
    person_id INTEGER NOT NULL REFERENCES people(id),
    PRIMARY KEY (movie_id, person_id)
);

CREATE INDEX IF NOT EXISTS idx_movie_languages_language_id ON movie_languages(language_id);
CREATE INDEX IF NOT EXISTS idx_movie_genres_genre_id ON movie_genres(genre_id);
CREATE INDEX IF NOT EXISTS idx_movie_actors_person_id ON movie_actors(person_id);
CREATE INDEX IF NOT EXISTS idx_movie_directors_person_id ON movie_directors(person_id);
"#;

const MIGRATION_002: &str = r#"
-- Corpus-level metadata (ground_zero, last_update)
CREATE TABLE IF NOT EXISTS catalog_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial_schema",
        sql: MIGRATION_001,
    },
    Migration {
        version: 2,
        name: "catalog_info",
        sql: MIGRATION_002,
    },
];
