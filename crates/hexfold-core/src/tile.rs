//! Per-cell merge of observation events.

use std::collections::BTreeMap;

use hexfold_protocol::{CompassPoint, Edge, Encounter, LinearCoord, Settlement};
use serde::Serialize;

use crate::ObservationEvent;

/// Everything known about one map cell, accumulated over a merge run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tile {
    pub terrain: String,
    /// Keyed by direction code.
    pub edges: BTreeMap<String, Edge>,
    pub resources: Vec<String>,
    pub settlements: Vec<Settlement>,
    pub encounters: Vec<Encounter>,
    pub compass_points: Vec<CompassPoint>,
    pub notes: Vec<String>,
    pub was_visited: bool,
    pub was_scouted: bool,
}

impl Tile {
    /// Fold one event into the tile.
    ///
    /// - terrain: last non-empty code wins.
    /// - edges: per direction, last edge with any content wins.
    /// - resources, settlements, encounters, compass points: a reported
    ///   list (even an empty one) replaces the previous list; an
    ///   unreported list leaves it alone.
    /// - notes: always appended.
    /// - visited/scouted: once set, never cleared.
    pub fn apply(&mut self, event: &ObservationEvent) {
        let observation = &event.observation;

        if !observation.terrain.is_empty() {
            self.terrain.clone_from(&observation.terrain);
        }

        for (direction, edge) in &observation.edges {
            if !edge.is_vacuous() {
                self.edges.insert(direction.clone(), edge.clone());
            }
        }

        replace_if_reported(&mut self.resources, &observation.resources);
        replace_if_reported(&mut self.settlements, &observation.settlements);
        replace_if_reported(&mut self.encounters, &observation.encounters);
        replace_if_reported(&mut self.compass_points, &observation.compass_points);

        self.notes.extend(observation.notes.iter().cloned());

        self.was_visited |= event.was_visited;
        self.was_scouted |= event.was_scouted;
    }
}

fn replace_if_reported<T: Clone>(current: &mut Vec<T>, reported: &Option<Vec<T>>) {
    if let Some(reported) = reported {
        current.clone_from(reported);
    }
}

/// All tiles touched by a merge run, ordered by location.
#[derive(Clone, Debug, Default)]
pub struct TileMap {
    tiles: BTreeMap<LinearCoord, Tile>,
}

/// Serializable view of one tile for `--dump-merged` style diagnostics.
#[derive(Debug, Serialize)]
pub struct TileEntry<'a> {
    pub grid: String,
    pub location: LinearCoord,
    #[serde(flatten)]
    pub tile: &'a Tile,
}

impl TileMap {
    /// Merge events in the given order. The caller is responsible for
    /// sorting them first; see [`crate::sort_events`].
    pub fn merge<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a ObservationEvent>,
    {
        let mut map = Self::default();
        for event in events {
            map.apply(event);
        }
        tracing::debug!(tiles = map.len(), "merged events into tiles");
        map
    }

    pub fn apply(&mut self, event: &ObservationEvent) {
        self.tiles.entry(event.location).or_default().apply(event);
    }

    pub fn get(&self, location: LinearCoord) -> Option<&Tile> {
        self.tiles.get(&location)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LinearCoord, &Tile)> {
        self.tiles.iter().map(|(location, tile)| (*location, tile))
    }

    pub fn locations(&self) -> impl Iterator<Item = LinearCoord> + '_ {
        self.tiles.keys().copied()
    }

    pub fn entries(&self) -> Vec<TileEntry<'_>> {
        self.iter()
            .map(|(location, tile)| TileEntry {
                grid: location.to_string(),
                location,
                tile,
            })
            .collect()
    }
}
