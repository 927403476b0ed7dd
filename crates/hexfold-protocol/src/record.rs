use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Bearing, Direction, LinearCoord, Resource, Settlement, Terrain, UnitId};

/// Renderer-facing view of one map cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexRecord {
    /// Absolute map position.
    pub location: LinearCoord,
    /// Position inside the render window (`location - offset`).
    pub render_at: LinearCoord,
    pub terrain: Terrain,
    pub was_visited: bool,
    pub was_scouted: bool,
    pub features: Features,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub canals: Vec<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fords: Vec<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passes: Vec<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rivers: Vec<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stone_roads: Vec<Direction>,
    /// Terrain seen across an edge.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub neighbors: BTreeMap<Direction, Terrain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settlements: Vec<Settlement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specials: Vec<SpecialHex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encounters: Vec<EncounterRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compass_points: Vec<CompassRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Raw edge text the report parser could not classify, as `"DIR: text"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unparsed: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub unit: UnitId,
    /// True when the unit belongs to the clan the map is drawn for.
    pub friendly: bool,
}

/// A settlement promoted to a named special hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialHex {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassRecord {
    pub bearing: Bearing,
    pub text: String,
}
