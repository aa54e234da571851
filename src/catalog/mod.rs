//! Movie catalog: inserts and filtered listings.

pub mod api;
pub mod models;
pub mod store;

pub use store::MovieStore;
