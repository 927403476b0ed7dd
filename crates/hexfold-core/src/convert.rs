//! Translation of merged tiles into renderer-facing hex records.

use hexfold_protocol::{
    Bearing, ClanId, CompassRecord, Diagnostic, Direction, EdgeFeature, EncounterRecord, Features,
    HexRecord, LinearCoord, Resource, Terrain, UnitId,
};

use crate::Tile;

/// Convert one tile, collecting every unrecognized code instead of stopping
/// at the first.
///
/// The record is always returned; fields that failed to convert are left
/// out of it (terrain falls back to [`Terrain::Blank`]).
pub fn convert_tile(
    location: LinearCoord,
    tile: &Tile,
    offset: LinearCoord,
    owning_clan: &ClanId,
) -> (HexRecord, Vec<Diagnostic>) {
    let context = location.to_string();
    let mut errors = Vec::new();
    let mut features = Features::default();

    let terrain = Terrain::parse(&tile.terrain).unwrap_or_else(|err| {
        errors.push(Diagnostic::new(context.as_str(), err));
        Terrain::Blank
    });

    for (code, edge) in &tile.edges {
        let direction = match Direction::parse(code) {
            Ok(direction) => direction,
            Err(err) => {
                errors.push(Diagnostic::new(context.as_str(), err));
                continue;
            }
        };

        if let Some(code) = non_empty(&edge.feature) {
            match EdgeFeature::parse(code) {
                Ok(feature) => {
                    if let Some(list) = bucket(&mut features, &feature) {
                        list.push(direction);
                    }
                }
                Err(err) => {
                    errors.push(Diagnostic::new(format!("{context} {direction}"), err));
                    continue;
                }
            }
        }
        if let Some(code) = non_empty(&edge.neighbor_terrain) {
            match Terrain::parse(code) {
                Ok(neighbor) => {
                    features.neighbors.insert(direction, neighbor);
                }
                Err(err) => errors.push(Diagnostic::new(format!("{context} {direction}"), err)),
            }
        }
        if let Some(raw) = non_empty(&edge.raw) {
            features.unparsed.push(format!("{direction}: {raw}"));
        }
    }

    for code in &tile.resources {
        match Resource::parse(code) {
            Ok(Resource::None) => {}
            Ok(resource) => features.resources.push(resource),
            Err(err) => errors.push(Diagnostic::new(context.as_str(), err)),
        }
    }

    features.settlements = tile.settlements.clone();

    features.encounters = tile
        .encounters
        .iter()
        .map(|encounter| {
            let unit = UnitId::new(encounter.unit.as_str());
            let friendly = unit.clan().as_ref() == Some(owning_clan);
            EncounterRecord { unit, friendly }
        })
        .collect();

    for point in &tile.compass_points {
        match Bearing::parse(&point.bearing) {
            Ok(bearing) => features.compass_points.push(CompassRecord {
                bearing,
                text: point.text.clone(),
            }),
            Err(err) => errors.push(Diagnostic::new(context.as_str(), err)),
        }
    }

    features.notes = tile.notes.clone();

    let record = HexRecord {
        location,
        render_at: location - offset,
        terrain,
        was_visited: tile.was_visited,
        was_scouted: tile.was_scouted,
        features,
    };
    (record, errors)
}

fn bucket<'a>(
    features: &'a mut Features,
    feature: &EdgeFeature,
) -> Option<&'a mut Vec<Direction>> {
    match feature {
        EdgeFeature::Canal => Some(&mut features.canals),
        EdgeFeature::Ford => Some(&mut features.fords),
        EdgeFeature::Pass => Some(&mut features.passes),
        EdgeFeature::River => Some(&mut features.rivers),
        EdgeFeature::StoneRoad => Some(&mut features.stone_roads),
        EdgeFeature::Unrecognized(_) => None,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
