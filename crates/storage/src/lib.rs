#![forbid(unsafe_code)]

pub mod persistence;
pub mod repository;
pub mod snapshot;
pub mod sqlite;

pub use persistence::{DEFAULT_SESSION_KEY, SnapshotStore};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
