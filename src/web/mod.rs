//! Web interface module
//!
//! Exposes the store over HTTP: each URL path names one record, and the
//! request methods map onto the store primitives (GET read, HEAD exists,
//! PUT/POST write, DELETE destroy).

mod handlers;
mod server;

pub use handlers::{AppState, DEFAULT_CONTENT_TYPE};
pub use server::{router, run, serve, STATS_PATH};
