//! Data model shared by the hexfold pipeline and its callers.

#![forbid(unsafe_code)]

mod codes;
mod document;
mod error;
mod grid;
mod hex;
mod ids;
mod record;
pub mod wire;

pub use crate::codes::*;
pub use crate::document::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::hex::*;
pub use crate::ids::*;
pub use crate::record::*;
pub use crate::wire::WireError;
