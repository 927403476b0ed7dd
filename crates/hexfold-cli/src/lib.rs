//! Filesystem side of hexfold: configuration, document loading and
//! output files. The binary in `main.rs` wires these to the core pipeline.

pub mod config;
pub mod input;
pub mod output;

pub use crate::config::{MapConfig, CONFIG_FILE};
pub use crate::input::{document_paths, load_documents};
pub use crate::output::{write_merged, JsonPlanWriter};
