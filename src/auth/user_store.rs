//! User storage backed by the shared SQLite connection.

use crate::auth::models::User;
use crate::storage::{unique_violation, Db};
use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use rusqlite::params;
use tracing::info;
use uuid::Uuid;

/// Outcome of a registration attempt. Conflicts are normal outcomes here,
/// reported by the UNIQUE constraints rather than a pre-insert lookup.
#[derive(Debug)]
pub enum CreateUser {
    Created(User),
    UsernameTaken,
    EmailTaken,
}

/// Outcome of a credential check.
#[derive(Debug)]
pub enum Authenticate {
    Ok(User),
    UnknownUser,
    BadPassword,
}

pub struct UserStore {
    db: Db,
}

impl UserStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Hash the password and insert a new user. Duplicate usernames and
    /// emails surface as constraint violations on the insert itself, so
    /// concurrent registrations cannot both succeed.
    pub fn create_user(&self, username: &str, password: &str, email: &str) -> Result<CreateUser> {
        let password_hash = hash(password, DEFAULT_COST).context("Failed to hash password")?;

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            email: email.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = self.db.lock();
        let result = conn.execute(
            "INSERT INTO users (id, username, password_hash, email, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.id.to_string(),
                user.username,
                user.password_hash,
                user.email,
                user.created_at,
            ],
        );

        match result {
            Ok(_) => {
                info!(username = %user.username, "Created user");
                Ok(CreateUser::Created(user))
            }
            Err(err) => match unique_violation(&err) {
                Some("users.username") => Ok(CreateUser::UsernameTaken),
                Some("users.email") => Ok(CreateUser::EmailTaken),
                _ => Err(anyhow::Error::from(err).context("Failed to insert user")),
            },
        }
    }

    /// Get user by username
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.db.lock();

        let mut stmt = conn.prepare(
            "SELECT id, username, password_hash, email, created_at
             FROM users WHERE username = ?1",
        )?;

        let user_result = stmt.query_row(params![username], |row| {
            let id: String = row.get(0)?;
            Ok(User {
                id: Uuid::parse_str(&id).unwrap_or_default(),
                username: row.get(1)?,
                password_hash: row.get(2)?,
                email: row.get(3)?,
                created_at: row.get(4)?,
            })
        });

        match user_result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user and check the password against the stored bcrypt hash.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Authenticate> {
        let Some(user) = self.get_user_by_username(username)? else {
            return Ok(Authenticate::UnknownUser);
        };

        let valid = verify(password, &user.password_hash).context("Failed to verify password")?;
        if valid {
            Ok(Authenticate::Ok(user))
        } else {
            Ok(Authenticate::BadPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::open_in_memory;

    fn create_test_store() -> UserStore {
        UserStore::new(open_in_memory().unwrap())
    }

    #[test]
    fn test_create_and_retrieve_user() {
        let store = create_test_store();

        let created = store.create_user("alice", "password123", "alice@example.com").unwrap();
        let user = match created {
            CreateUser::Created(user) => user,
            other => panic!("Expected Created, got {:?}", other),
        };
        assert_eq!(user.username, "alice");
        // Stored hash is not the plaintext password
        assert_ne!(user.password_hash, "password123");

        let retrieved = store.get_user_by_username("alice").unwrap().unwrap();
        assert_eq!(retrieved.username, "alice");
        assert_eq!(retrieved.email, "alice@example.com");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = create_test_store();

        store.create_user("bob", "p", "b@x.com").unwrap();
        let second = store.create_user("bob", "p2", "other@x.com").unwrap();
        assert!(matches!(second, CreateUser::UsernameTaken));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = create_test_store();

        store.create_user("bob", "p", "b@x.com").unwrap();
        let second = store.create_user("robert", "p2", "b@x.com").unwrap();
        assert!(matches!(second, CreateUser::EmailTaken));
    }

    #[test]
    fn test_authenticate() {
        let store = create_test_store();
        store.create_user("alice", "password123", "alice@example.com").unwrap();

        assert!(matches!(
            store.authenticate("alice", "password123").unwrap(),
            Authenticate::Ok(_)
        ));
        assert!(matches!(
            store.authenticate("alice", "wrong").unwrap(),
            Authenticate::BadPassword
        ));
        assert!(matches!(
            store.authenticate("nobody", "password123").unwrap(),
            Authenticate::UnknownUser
        ));
    }

    #[test]
    fn test_unknown_user_lookup() {
        let store = create_test_store();
        assert!(store.get_user_by_username("missing").unwrap().is_none());
    }
}
