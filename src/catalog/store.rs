//! Movie storage backed by the shared SQLite connection.

use crate::catalog::models::{Movie, MovieQuery};
use crate::storage::{unique_violation, Db};
use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, ToSql};
use tracing::info;

/// Listings return at most this many rows, most recent first.
const LIST_LIMIT: u32 = 50;

/// Outcome of an insert attempt; a duplicate title is a normal outcome
/// reported by the UNIQUE constraint.
#[derive(Debug)]
pub enum InsertMovie {
    Inserted(Movie),
    DuplicateTitle,
}

pub struct MovieStore {
    db: Db,
}

impl MovieStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a movie; the title's UNIQUE constraint reports duplicates.
    pub fn insert_movie(&self, title: &str, director: &str, year: i64) -> Result<InsertMovie> {
        let conn = self.db.lock();

        let result = conn.execute(
            "INSERT INTO movies (title, director, year) VALUES (?1, ?2, ?3)",
            params![title, director, year],
        );

        match result {
            Ok(_) => {
                let movie = Movie {
                    id: conn.last_insert_rowid(),
                    title: title.to_string(),
                    director: director.to_string(),
                    year,
                };
                info!(title, director, year, "Movie added");
                Ok(InsertMovie::Inserted(movie))
            }
            Err(err) => match unique_violation(&err) {
                Some("movies.title") => Ok(InsertMovie::DuplicateTitle),
                _ => Err(anyhow::Error::from(err).context("Failed to insert movie")),
            },
        }
    }

    /// List movies matching the filters, most recently inserted first,
    /// capped at 50 rows. Title and director filters are case-insensitive
    /// substring matches; year is exact.
    pub fn list_movies(&self, filters: &MovieQuery) -> Result<Vec<Movie>> {
        let mut sql = String::from("SELECT id, title, director, year FROM movies");
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &filters.title {
            clauses.push("LOWER(title) LIKE '%' || LOWER(?) || '%'");
            values.push(Box::new(title.clone()));
        }
        if let Some(director) = &filters.director {
            clauses.push("LOWER(director) LIKE '%' || LOWER(?) || '%'");
            values.push(Box::new(director.clone()));
        }
        if let Some(year) = filters.year {
            clauses.push("year = ?");
            values.push(Box::new(year));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id DESC LIMIT ");
        sql.push_str(&LIST_LIMIT.to_string());

        let conn = self.db.lock();
        let mut stmt = conn.prepare(&sql).context("Failed to prepare listing query")?;

        let movies = stmt
            .query_map(params_from_iter(values.iter().map(|v| v.as_ref())), |row| {
                Ok(Movie {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    director: row.get(2)?,
                    year: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }
}
