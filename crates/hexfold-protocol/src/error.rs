use thiserror::Error;

use crate::{CodeKind, CoordinateError};

/// Problems with the shape of a report document itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema version {found:?}, expected {expected:?}")]
    Version { expected: String, found: String },
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("malformed turn {0:?}, expected YYYY-MM")]
    MalformedTurn(String),
    #[error("malformed clan {0:?}, expected four digits starting with 0")]
    MalformedClan(String),
}

/// Everything that can be wrong with input data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error("unknown direction {0:?}")]
    Direction(String),
    #[error("unknown bearing {0:?}")]
    Bearing(String),
    #[error("unknown {kind} code {code:?}")]
    UnknownEnum { kind: CodeKind, code: String },
}

/// A [`MapError`] together with where it was found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{context}: {error}")]
pub struct Diagnostic {
    pub context: String,
    pub error: MapError,
}

impl Diagnostic {
    pub fn new(context: impl Into<String>, error: impl Into<MapError>) -> Self {
        Self {
            context: context.into(),
            error: error.into(),
        }
    }
}
