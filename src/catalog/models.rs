//! Movie catalog data structures.

use serde::{Deserialize, Serialize};

/// Movie record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i64,
}

/// Insert request body.
///
/// Fields are optional so the handler can answer a missing field with the
/// 400 envelope instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AddFilmRequest {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
}

/// Listing filters (query string).
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    /// Case-insensitive substring match
    pub title: Option<String>,
    /// Case-insensitive substring match
    pub director: Option<String>,
    /// Exact match
    pub year: Option<i64>,
}

/// Listing response: `{rc: 0, data: [...]}`
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub rc: u8,
    pub data: Vec<Movie>,
}
