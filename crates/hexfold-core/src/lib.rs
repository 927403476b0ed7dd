//! Consolidates many turn reports into one hex map.
//!
//! Documents are validated and flattened into observation events, sorted
//! into merge order and folded into per-cell tiles. The tiles are then
//! bounded, converted to typed hex records and handed to a renderer.

#![forbid(unsafe_code)]

mod bounds;
mod convert;
mod extract;
mod order;
mod pipeline;
mod render;
mod special;
mod tile;
mod validate;

pub use crate::bounds::*;
pub use crate::convert::*;
pub use crate::extract::*;
pub use crate::order::*;
pub use crate::pipeline::*;
pub use crate::render::*;
pub use crate::special::*;
pub use crate::tile::*;
pub use crate::validate::*;
