//! In-memory storage module
//!
//! Provides the record type and the concurrent map that holds records.
//! This module is independent of the HTTP front end (loose coupling).

mod error;
mod memory;
mod record;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, StoreStats};
pub use record::{Record, TEXT_PLAIN_UTF8};
