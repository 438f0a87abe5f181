use rusqlite::{Connection, OptionalExtension, ToSql};
use std::path::Path;

use crate::catalog::CatalogInfo;
use crate::error::{Error, Result};
use crate::model::{LinkKind, MovieDetail, MovieId};

use super::migrations::MIGRATIONS;

/// A catalog database connection.
///
/// Reads go through [`crate::CatalogRepository`]; the inherent methods here
/// are the write path.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Movie writes
impl Database {
    /// Insert a movie with its associations in one transaction.
    ///
    /// Languages, genres and people are matched by name; unknown names are
    /// created (keeping a supplied non-zero id). A zero movie id lets the
    /// database assign one. Returns the stored id.
    pub fn insert_movie(&self, detail: &MovieDetail) -> Result<MovieId> {
        let movie = &detail.movie;
        movie.validate()?;

        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO movies (
                id, title, alttitle, year, description, format, length,
                region, rating, disks, score, picture, type, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            rusqlite::params![
                (!movie.id.is_unassigned()).then_some(movie.id),
                movie.title,
                movie.alttitle,
                movie.year,
                movie.description,
                movie.format,
                movie.length,
                movie.region,
                movie.rating,
                movie.disks,
                movie.score,
                movie.picture,
                movie.media_type,
                movie.created_at.map(|at| at.to_rfc3339()),
                movie.updated_at.map(|at| at.to_rfc3339()),
            ],
        )?;
        let id = MovieId::new(tx.last_insert_rowid());

        for language in &detail.languages {
            let origin: [(&str, &dyn ToSql); 2] = [
                ("country", &language.country),
                ("native_name", &language.native_name),
            ];
            let target = resolve_named(
                &tx,
                "languages",
                language.id.get(),
                &language.name,
                &origin,
            )?;
            link(&tx, LinkKind::Language, id, target)?;
        }

        for genre in &detail.genres {
            let target = resolve_named(&tx, "genres", genre.id.get(), &genre.name, &[])?;
            link(&tx, LinkKind::Genre, id, target)?;
        }

        for (kind, people) in [
            (LinkKind::Actor, &detail.actors),
            (LinkKind::Director, &detail.directors),
        ] {
            for person in people {
                let target = resolve_named(&tx, "people", person.id.get(), &person.name, &[])?;
                link(&tx, kind, id, target)?;
            }
        }

        tx.commit()?;
        log::info!("Inserted movie {} ({})", id, movie.title);
        Ok(id)
    }

    /// Delete a movie and its association rows.
    ///
    /// Returns the number of rows removed. An unknown id is
    /// [`Error::NotFound`] and leaves the database untouched.
    pub fn delete_movie(&self, id: MovieId) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;

        let mut removed = 0;
        for kind in LinkKind::ALL {
            removed += tx.execute(
                &format!("DELETE FROM {} WHERE movie_id = ?1", kind.table()),
                [id],
            )?;
        }
        if tx.execute("DELETE FROM movies WHERE id = ?1", [id])? == 0 {
            return Err(Error::NotFound {
                entity: "movie",
                id: id.get(),
            });
        }
        removed += 1;

        tx.commit()?;
        log::info!("Deleted movie {} ({} rows)", id, removed);
        Ok(removed)
    }

    /// Store corpus-level timestamps. `None` fields are left untouched.
    pub fn set_catalog_info(&self, info: &CatalogInfo) -> Result<()> {
        for (key, value) in [
            ("ground_zero", info.ground_zero),
            ("last_update", info.last_update),
        ] {
            if let Some(at) = value {
                self.conn.execute(
                    "INSERT INTO catalog_info (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    rusqlite::params![key, at.to_rfc3339()],
                )?;
            }
        }
        Ok(())
    }
}

fn find_by_name(conn: &Connection, table: &str, name: &str) -> Result<Option<i64>> {
    let id = conn
        .query_row(
            &format!("SELECT id FROM {table} WHERE name = ?1"),
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// Find a named row, creating it when missing.
///
/// A zero `id` lets the database assign one. `extra` columns are only
/// written on creation.
fn resolve_named(
    conn: &Connection,
    table: &str,
    id: i64,
    name: &str,
    extra: &[(&str, &dyn ToSql)],
) -> Result<i64> {
    if let Some(existing) = find_by_name(conn, table, name)? {
        return Ok(existing);
    }

    let assigned = (id != 0).then_some(id);
    let mut columns = vec!["id", "name"];
    let mut values: Vec<&dyn ToSql> = vec![&assigned, &name];
    for (column, value) in extra {
        columns.push(*column);
        values.push(*value);
    }
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();

    conn.execute(
        &format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        ),
        values.as_slice(),
    )?;
    Ok(conn.last_insert_rowid())
}

fn link(conn: &Connection, kind: LinkKind, movie: MovieId, target: i64) -> Result<()> {
    conn.execute(
        &format!(
            "INSERT OR IGNORE INTO {} (movie_id, {}) VALUES (?1, ?2)",
            kind.table(),
            kind.target_column()
        ),
        rusqlite::params![movie, target],
    )?;
    Ok(())
}
