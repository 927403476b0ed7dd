//! Hand-off to whatever draws the map.
//!
//! The core never writes files; a caller supplies a [`MapRenderer`] and the
//! pipeline feeds it hex records followed by the frame.

use hexfold_protocol::{HexRecord, LinearCoord, TurnId};
use serde::Serialize;

/// Extent of the drawn area and the latest turn that contributed to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub upper_left: LinearCoord,
    pub lower_right: LinearCoord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_turn: Option<TurnId>,
}

pub trait MapRenderer {
    type Output;
    type Error;

    /// Add one hex to the map being built.
    fn merge_hex(&mut self, hex: &HexRecord);

    /// Finish the map once every hex has been merged.
    fn finalize(self, frame: &Frame) -> Result<Self::Output, Self::Error>;
}

/// Feed every hex to `renderer` in order, then finalize it.
pub fn render<R: MapRenderer>(
    mut renderer: R,
    hexes: &[HexRecord],
    frame: &Frame,
) -> Result<R::Output, R::Error> {
    for hex in hexes {
        renderer.merge_hex(hex);
    }
    tracing::debug!(hexes = hexes.len(), "finalizing map");
    renderer.finalize(frame)
}

/// Keeps everything it is given; useful for tests and for callers that
/// post-process the records themselves.
#[derive(Debug, Default)]
pub struct CollectingRenderer {
    pub hexes: Vec<HexRecord>,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct RenderedMap {
    pub frame: Frame,
    pub hexes: Vec<HexRecord>,
}

impl MapRenderer for CollectingRenderer {
    type Output = RenderedMap;
    type Error = std::convert::Infallible;

    fn merge_hex(&mut self, hex: &HexRecord) {
        self.hexes.push(hex.clone());
    }

    fn finalize(self, frame: &Frame) -> Result<RenderedMap, Self::Error> {
        Ok(RenderedMap {
            frame: *frame,
            hexes: self.hexes,
        })
    }
}
