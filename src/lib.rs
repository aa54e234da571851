//! Movie catalog REST backend.
//!
//! Exposes the modules for use by the binary and the request-level tests.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod middleware;
pub mod response;
pub mod server;
pub mod storage;
