use serde::Serialize;
use thiserror::Error;

use crate::Document;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn deserialize_document(bytes: &[u8]) -> Result<Document, WireError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn serialize_document(document: &Document) -> Result<Vec<u8>, WireError> {
    Ok(serde_json::to_vec(document)?)
}

/// Pretty-printed JSON, newline terminated, for files meant to be diffed.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, WireError> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}
