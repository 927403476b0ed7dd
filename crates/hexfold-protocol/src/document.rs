//! Decoded turn-report documents.
//!
//! One document per report. Coordinates are kept as grid strings and codes
//! as raw text; validation and extraction turn them into typed values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema version understood by this crate.
pub const SCHEMA_VERSION: &str = "1";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub schema_version: String,
    /// Where the document came from (file name); only used in diagnostics.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default)]
    pub game: String,
    /// Turn id, `YYYY-MM`.
    #[serde(default)]
    pub turn: String,
    /// Clan that received this report.
    #[serde(default)]
    pub clan: String,
    #[serde(default)]
    pub clans: Vec<ClanReport>,
    /// Place names this report marks as special hexes.
    #[serde(default)]
    pub special_hexes: Vec<String>,
}

impl Document {
    /// Name used to prefix diagnostics.
    pub fn label(&self) -> String {
        if self.source.is_empty() {
            format!("{}.{}", self.turn, self.clan)
        } else {
            self.source.clone()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClanReport {
    pub id: String,
    #[serde(default)]
    pub units: Vec<UnitReport>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitReport {
    pub id: String,
    /// Grid string where the unit finished the turn, or `"N/A"`.
    #[serde(default)]
    pub ending: String,
    #[serde(default)]
    pub moves: Vec<MoveChain>,
    #[serde(default)]
    pub scouts: Vec<ScoutRun>,
}

impl UnitReport {
    pub fn has_observations(&self) -> bool {
        self.moves
            .iter()
            .flat_map(|chain| &chain.steps)
            .chain(self.scouts.iter().flat_map(|run| &run.steps))
            .any(|step| step.observation.is_some())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveChain {
    /// Grid string the chain starts from, when the report gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoutRun {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Advance,
    Follow,
    Goto,
    Scout,
    Still,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Grid string where the step ended. May be empty when it can be
    /// derived from the previous location and `direction`.
    #[serde(default)]
    pub ending: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<Observation>,
}

/// What a unit saw at one location.
///
/// List fields are `None` when the report said nothing about them and
/// `Some(vec![])` when it explicitly reported none.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Terrain code; empty when not reported.
    #[serde(default)]
    pub terrain: String,
    /// Keyed by direction code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub edges: BTreeMap<String, Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Vec<Settlement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounters: Option<Vec<Encounter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compass_points: Option<Vec<CompassPoint>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub was_visited: bool,
    #[serde(default)]
    pub was_scouted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_terrain: Option<String>,
    /// Text the report parser could not classify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl Edge {
    /// True when the edge carries no feature, neighbor terrain or raw text.
    pub fn is_vacuous(&self) -> bool {
        [&self.feature, &self.neighbor_terrain, &self.raw]
            .into_iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Id of the actor that was met.
    pub unit: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassPoint {
    pub bearing: String,
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_lists_decode_differently() {
        let absent: Observation = serde_json::from_str(r#"{"terrain":"PR"}"#).unwrap();
        assert_eq!(absent.settlements, None);

        let empty: Observation =
            serde_json::from_str(r#"{"terrain":"PR","settlements":[]}"#).unwrap();
        assert_eq!(empty.settlements, Some(Vec::new()));
    }

    #[test]
    fn vacuous_edges() {
        assert!(Edge::default().is_vacuous());
        assert!(Edge {
            feature: Some(String::new()),
            ..Edge::default()
        }
        .is_vacuous());
        assert!(!Edge {
            raw: Some("Ford?".into()),
            ..Edge::default()
        }
        .is_vacuous());
    }

    #[test]
    fn unit_without_steps_has_no_observations() {
        let unit = UnitReport {
            id: "0138".into(),
            ending: "N/A".into(),
            ..UnitReport::default()
        };
        assert!(!unit.has_observations());
    }
}
