//! pathstore - a concurrent in-memory record store keyed by path
//!
//! The crate is split so each layer only depends on the one below it:
//! - `store`: the record type and the lock-guarded map (no I/O, no logging)
//! - `config`: server settings from defaults, a JSON file and the environment
//! - `web`: an HTTP front end mapping URL paths onto store records

pub mod config;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::ServerConfig;
pub use store::{MemoryStore, Record, StoreError, StoreStats};
