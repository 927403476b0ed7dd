//! Stage sequencing: validate, flatten, sort, merge, bound, convert, promote.

use std::fmt;

use hexfold_protocol::{
    ClanId, Diagnostic, Document, HexRecord, LinearCoord, TurnId, SCHEMA_VERSION,
};
use thiserror::Error;

use crate::{
    compute_bounds, convert_tile, flatten, promote, sort_events, validate, Bounds, Frame,
    SpecialHexRegistry, TileMap, DEFAULT_BORDER,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Flatten,
    Convert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Validate => "validate",
            Stage::Flatten => "flatten",
            Stage::Convert => "convert",
        })
    }
}

/// Internal consistency checks that input data alone cannot trip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("hex {location} renders at negative position {render_at}")]
    NegativeRenderCoordinate {
        location: LinearCoord,
        render_at: LinearCoord,
    },
    #[error("tile {0} lies outside the computed bounds")]
    OutsideBounds(LinearCoord),
}

#[derive(Debug, Error)]
pub enum Failure {
    /// A stage found problems in the input; every one of them is listed.
    #[error("{stage} stage reported {} error(s)", .diagnostics.len())]
    Input {
        stage: Stage,
        diagnostics: Vec<Diagnostic>,
    },
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

impl Failure {
    fn input(stage: Stage, diagnostics: Vec<Diagnostic>) -> Self {
        Failure::Input { stage, diagnostics }
    }
}

/// Result of the merge half of the pipeline.
#[derive(Debug, Default)]
pub struct Merged {
    pub tiles: TileMap,
    pub max_turn: Option<TurnId>,
}

#[derive(Debug)]
pub struct Outcome {
    pub tiles: TileMap,
    pub bounds: Bounds,
    pub frame: Frame,
    /// Converted and promoted records, ordered by location.
    pub hexes: Vec<HexRecord>,
    pub registry: SpecialHexRegistry,
}

/// One consolidation run for a single owning clan.
#[derive(Clone, Debug)]
pub struct Pipeline {
    owning_clan: ClanId,
    schema_version: String,
    border: i32,
    quit_on_invalid_documents: bool,
}

impl Pipeline {
    pub fn new(owning_clan: ClanId) -> Self {
        Self {
            owning_clan,
            schema_version: SCHEMA_VERSION.to_string(),
            border: DEFAULT_BORDER,
            quit_on_invalid_documents: true,
        }
    }

    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = version.into();
        self
    }

    pub fn with_border(mut self, border: i32) -> Self {
        self.border = border.max(0);
        self
    }

    /// When false, validation problems are logged and the run continues;
    /// extraction still skips whatever it cannot read.
    pub fn quit_on_invalid_documents(mut self, quit: bool) -> Self {
        self.quit_on_invalid_documents = quit;
        self
    }

    pub fn run(&self, documents: &[Document]) -> Result<Outcome, Failure> {
        let merged = self.merge(documents)?;
        self.convert(documents, merged)
    }

    /// Validate, flatten, sort and merge. Stops at the first stage that
    /// reports errors.
    pub fn merge(&self, documents: &[Document]) -> Result<Merged, Failure> {
        let problems = validate(documents, &self.schema_version);
        if !problems.is_empty() {
            if self.quit_on_invalid_documents {
                return Err(Failure::input(Stage::Validate, problems));
            }
            for problem in &problems {
                tracing::warn!(%problem, "ignoring invalid document data");
            }
        }
        tracing::info!(documents = documents.len(), "validated documents");

        let (mut events, problems) = flatten(documents);
        if !problems.is_empty() {
            return Err(Failure::input(Stage::Flatten, problems));
        }
        sort_events(&mut events, &self.owning_clan);
        tracing::info!(events = events.len(), "extracted observation events");

        let tiles = TileMap::merge(&events);
        tracing::info!(tiles = tiles.len(), "merged tiles");

        let max_turn = documents
            .iter()
            .filter_map(|doc| TurnId::parse(&doc.turn).ok())
            .max();
        Ok(Merged { tiles, max_turn })
    }

    /// Bound, convert and promote already merged tiles.
    pub fn convert(&self, documents: &[Document], merged: Merged) -> Result<Outcome, Failure> {
        let Merged { tiles, max_turn } = merged;
        let bounds = compute_bounds(&tiles, self.border);

        let mut hexes = Vec::with_capacity(tiles.len());
        let mut problems = Vec::new();
        for (location, tile) in tiles.iter() {
            if !bounds.contains(location) {
                return Err(InvariantError::OutsideBounds(location).into());
            }
            let (hex, errors) = convert_tile(location, tile, bounds.offset, &self.owning_clan);
            if hex.render_at.column < 0 || hex.render_at.row < 0 {
                return Err(InvariantError::NegativeRenderCoordinate {
                    location,
                    render_at: hex.render_at,
                }
                .into());
            }
            problems.extend(errors);
            hexes.push(hex);
        }
        if !problems.is_empty() {
            return Err(Failure::input(Stage::Convert, problems));
        }

        let registry = SpecialHexRegistry::collect(documents);
        promote(&mut hexes, &registry);

        let frame = Frame {
            upper_left: bounds.upper_left,
            lower_right: bounds.lower_right,
            max_turn,
        };
        tracing::info!(
            hexes = hexes.len(),
            special_hexes = registry.len(),
            upper_left = %frame.upper_left,
            lower_right = %frame.lower_right,
            "converted tiles"
        );
        Ok(Outcome {
            tiles,
            bounds,
            frame,
            hexes,
            registry,
        })
    }
}
