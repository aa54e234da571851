//! SQLite storage bootstrap.
//!
//! One connection is opened at startup (WAL mode) and shared across the
//! stores behind a mutex; each store call holds the lock only for the
//! duration of its statement. Uniqueness of usernames, emails, and movie
//! titles is enforced by the schema so concurrent inserts cannot race a
//! lookup-then-insert window.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tracing::info;

/// Shared database handle passed into the stores.
pub type Db = Arc<Mutex<Connection>>;

const SCHEMA_SQL: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;

CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT UNIQUE NOT NULL,
    director TEXT NOT NULL,
    year INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_movies_year ON movies(year);
"#;

/// Open (or create) the database at `path` and apply the schema.
pub fn open_database(path: &str) -> Result<Db> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path))?;
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to apply database schema")?;

    info!(path, "Database ready");
    Ok(Arc::new(Mutex::new(conn)))
}

/// In-memory database, used by tests.
pub fn open_in_memory() -> Result<Db> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to apply database schema")?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Map a UNIQUE-constraint failure to the violated `table.column`, if any.
///
/// SQLite reports these as `UNIQUE constraint failed: users.username`; the
/// suffix tells the caller which field collided.
pub(crate) fn unique_violation(err: &rusqlite::Error) -> Option<&str> {
    if let rusqlite::Error::SqliteFailure(e, Some(msg)) = err {
        if e.code == rusqlite::ErrorCode::ConstraintViolation {
            return msg.strip_prefix("UNIQUE constraint failed: ");
        }
    }
    None
}
