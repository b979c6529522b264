//! Client-local durable storage for resolved taxonomy selections.
//!
//! The cascade writes its final resolved subject list under a fixed key so
//! the list survives navigation to a detail view and back. This crate is
//! the Rust rendition of that storage contract: a [`SubjectStore`] trait
//! with a JSON-file-backed implementation for real sessions and an
//! in-memory one for tests.

pub mod error;
pub mod store;

pub use error::{PersistError, Result};
pub use store::{JsonFileStore, MemoryStore, SUBJECTS_KEY, SubjectStore};
