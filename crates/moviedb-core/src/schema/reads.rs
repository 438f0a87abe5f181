use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::OptionalExtension;

use crate::catalog::{CatalogInfo, CatalogRepository};
use crate::error::Result;
use crate::model::{Genre, Language, Link, LinkKind, Movie, MovieId, Person, PersonId, Role};

use super::db::Database;

const MOVIE_COLUMNS: &str = "id, title, alttitle, year, description, format, length,
     region, rating, disks, score, picture, type, created_at, updated_at";

impl CatalogRepository for Database {
    fn movies(&self) -> Result<Vec<Movie>> {
        let mut stmt = self
            .conn()
            .prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"))?;
        let movies = stmt
            .query_map([], row_to_movie)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
    }

    fn movie(&self, id: MovieId) -> Result<Option<Movie>> {
        let movie = self
            .conn()
            .query_row(
                &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1"),
                [id],
                row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }

    fn links(&self, kind: LinkKind) -> Result<Vec<Link>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT movie_id, {col} FROM {table} ORDER BY movie_id, {col}",
            col = kind.target_column(),
            table = kind.table()
        ))?;
        let links = stmt
            .query_map([], |row| {
                Ok(Link {
                    movie: row.get(0)?,
                    target: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(links)
    }

    fn linked_movies(&self, kind: LinkKind, target: i64) -> Result<Vec<MovieId>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT movie_id FROM {} WHERE {} = ?1 ORDER BY movie_id",
            kind.table(),
            kind.target_column()
        ))?;
        let ids = stmt
            .query_map([target], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    fn movie_languages(&self, id: MovieId) -> Result<Vec<Language>> {
        let mut stmt = self.conn().prepare(
            "SELECT l.id, l.name, l.country, l.native_name
             FROM languages l
             JOIN movie_languages ml ON ml.language_id = l.id
             WHERE ml.movie_id = ?1
             ORDER BY l.id",
        )?;
        let languages = stmt
            .query_map([id], row_to_language)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(languages)
    }

    fn movie_genres(&self, id: MovieId) -> Result<Vec<Genre>> {
        let mut stmt = self.conn().prepare(
            "SELECT g.id, g.name
             FROM genres g
             JOIN movie_genres mg ON mg.genre_id = g.id
             WHERE mg.movie_id = ?1
             ORDER BY g.id",
        )?;
        let genres = stmt
            .query_map([id], |row| {
                Ok(Genre {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(genres)
    }

    fn movie_people(&self, id: MovieId, role: Role) -> Result<Vec<Person>> {
        let kind = LinkKind::from(role);
        let mut stmt = self.conn().prepare(&format!(
            "SELECT p.id, p.name
             FROM people p
             JOIN {} mp ON mp.person_id = p.id
             WHERE mp.movie_id = ?1
             ORDER BY p.id",
            kind.table()
        ))?;
        let people = stmt
            .query_map([id], row_to_person)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(people)
    }

    fn person(&self, id: PersonId) -> Result<Option<Person>> {
        let person = self
            .conn()
            .query_row(
                "SELECT id, name FROM people WHERE id = ?1",
                [id],
                row_to_person,
            )
            .optional()?;
        Ok(person)
    }

    fn people(&self) -> Result<Vec<Person>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name FROM people ORDER BY id")?;
        let people = stmt
            .query_map([], row_to_person)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(people)
    }

    fn languages(&self) -> Result<Vec<Language>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, country, native_name FROM languages ORDER BY id")?;
        let languages = stmt
            .query_map([], row_to_language)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(languages)
    }

    fn genres(&self) -> Result<Vec<Genre>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name FROM genres ORDER BY id")?;
        let genres = stmt
            .query_map([], |row| {
                Ok(Genre {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(genres)
    }

    fn catalog_info(&self) -> Result<CatalogInfo> {
        let mut stmt = self
            .conn()
            .prepare("SELECT key, value FROM catalog_info")?;
        let entries = stmt
            .query_map([], |row| {
                let key: String = row.get(0)?;
                let value = parse_timestamp(1, Some(row.get::<_, String>(1)?))?;
                Ok((key, value))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut info = CatalogInfo::default();
        for (key, value) in entries {
            match key.as_str() {
                "ground_zero" => info.ground_zero = value,
                "last_update" => info.last_update = value,
                other => log::debug!("Ignoring catalog_info key {}", other),
            }
        }
        Ok(info)
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        title: row.get(1)?,
        alttitle: row.get(2)?,
        year: row.get(3)?,
        description: row.get(4)?,
        format: row.get(5)?,
        length: row.get(6)?,
        region: row.get(7)?,
        rating: row.get(8)?,
        disks: row.get(9)?,
        score: row.get(10)?,
        picture: row.get(11)?,
        media_type: row.get(12)?,
        created_at: parse_timestamp(13, row.get(13)?)?,
        updated_at: parse_timestamp(14, row.get(14)?)?,
    })
}

fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_language(row: &rusqlite::Row<'_>) -> rusqlite::Result<Language> {
    Ok(Language {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        native_name: row.get(3)?,
    })
}

/// Corrupt timestamps surface as conversion errors rather than panics.
fn parse_timestamp(idx: usize, raw: Option<String>) -> rusqlite::Result<Option<DateTime<Utc>>> {
    raw.map(|text| {
        DateTime::parse_from_rfc3339(&text)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}
