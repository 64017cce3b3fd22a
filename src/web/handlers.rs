//! HTTP handlers mapping URL paths onto store records

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::store::{MemoryStore, Record, StoreError, StoreStats};

/// Shared application state
pub type AppState = Arc<MemoryStore>;

/// Content type recorded when a write carries no `Content-Type` header
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
        }
    }
}

/// Store key for a request: the raw path, still percent-encoded
///
/// Decoding first would fold `/a%2Fb` and `/a/b` onto the same record.
fn record_key(uri: &Uri) -> String {
    uri.path().to_string()
}

/// Build a `200 OK` response carrying the record's payload and content type
fn record_response(record: Record) -> Response {
    let (payload, content_type) = record.into_parts();
    let mut response = (StatusCode::OK, payload).into_response();

    // Stored types are opaque; anything that isn't a valid header is dropped
    let headers = response.headers_mut();
    match HeaderValue::from_str(&content_type) {
        Ok(value) if !content_type.is_empty() => {
            headers.insert(header::CONTENT_TYPE, value);
        }
        _ => {
            headers.remove(header::CONTENT_TYPE);
        }
    }

    response
}

/// GET a record
pub async fn get_record(State(store): State<AppState>, uri: Uri) -> Response {
    let key = record_key(&uri);

    match store.read(&key) {
        Ok(record) => {
            debug!("GET {} -> {} bytes ({})", key, record.len(), record.content_type());
            record_response(record)
        }
        Err(e) => {
            debug!("GET {} -> not found", e.key());
            e.into_response()
        }
    }
}

/// HEAD a record: existence check only
pub async fn head_record(State(store): State<AppState>, uri: Uri) -> StatusCode {
    let key = record_key(&uri);

    if store.exists(&key) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// PUT or POST a record
///
/// Always overwrites. Answers `201 Created` for a new key and
/// `204 No Content` when an existing record was replaced.
pub async fn put_record(
    State(store): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let key = record_key(&uri);

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    debug!("WRITE {} <- {} bytes ({})", key, body.len(), content_type);

    // Only decides the status code; the write itself is unconditional
    let existed = store.exists(&key);
    store.write(key, Record::from_bytes(body, content_type));

    if existed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::CREATED
    }
}

/// DELETE a record; deleting a missing key also succeeds
pub async fn delete_record(State(store): State<AppState>, uri: Uri) -> StatusCode {
    let key = record_key(&uri);
    debug!("DELETE {}", key);

    store.destroy(&key);
    StatusCode::NO_CONTENT
}

/// Get store statistics
pub async fn stats_handler(State(store): State<AppState>) -> Json<StoreStats> {
    Json(store.stats())
}
