//! Files written by the command line: the render plan and the merged tile
//! dump.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use hexfold_core::{Frame, MapRenderer, RenderedMap, TileMap};
use hexfold_protocol::{wire, HexRecord};

/// Writes the frame and every merged hex to a `.json` render plan.
#[derive(Debug)]
pub struct JsonPlanWriter {
    path: PathBuf,
    hexes: Vec<HexRecord>,
}

impl JsonPlanWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().map_or(true, |ext| ext != "json") {
            bail!(
                "output {} must end in .json (other map formats are written by external tools)",
                path.display()
            );
        }
        Ok(Self {
            path,
            hexes: Vec::new(),
        })
    }
}

impl MapRenderer for JsonPlanWriter {
    type Output = PathBuf;
    type Error = anyhow::Error;

    fn merge_hex(&mut self, hex: &HexRecord) {
        self.hexes.push(hex.clone());
    }

    fn finalize(self, frame: &Frame) -> Result<PathBuf> {
        let plan = RenderedMap {
            frame: *frame,
            hexes: self.hexes,
        };
        write_json(&self.path, &plan)?;
        tracing::info!(path = %self.path.display(), hexes = plan.hexes.len(), "wrote render plan");
        Ok(self.path)
    }
}

/// Dump merged tiles, one entry per tile with its grid location.
pub fn write_merged(path: &Path, tiles: &TileMap) -> Result<()> {
    write_json(path, &tiles.entries())?;
    tracing::info!(path = %path.display(), tiles = tiles.len(), "wrote merged tiles");
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = wire::to_pretty_json(value)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
