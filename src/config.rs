//! Runtime configuration loaded from the environment.

use anyhow::{Context, Result};

/// Server configuration, sourced from env vars (with `.env` support).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./mflix.db".to_string());

        // The token signing key must come from the environment, never source.
        let jwt_secret = std::env::var("JWT_SECRET")
            .context("JWT_SECRET must be set (see .env.example)")?;

        Ok(Self {
            port,
            database_path,
            jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_PATH");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, "./mflix.db");
        assert_eq!(config.jwt_secret, "test-secret");
    }
}
