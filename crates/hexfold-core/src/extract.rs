//! Flattening report documents into a list of observation events.

use hexfold_protocol::{
    ClanId, CoordinateError, Diagnostic, Direction, Document, Intent, LinearCoord, MapError,
    Observation, Step, TurnId, UnitId,
};
use serde::Serialize;

/// One observation of one map cell, anchored in time and space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObservationEvent {
    pub turn: TurnId,
    pub clan: ClanId,
    /// The unit whose report carried the observation. Scout runs report
    /// under their parent unit, so merge order keeps them after its moves.
    pub unit: UnitId,
    /// The unit, or the scout run, that made the observation.
    pub actor: UnitId,
    pub location: LinearCoord,
    pub observation: Observation,
    pub was_visited: bool,
    pub was_scouted: bool,
}

/// Walk every clan, unit, move chain and scout run of every document and
/// emit one event per step that carries an observation.
///
/// A step whose location cannot be resolved is reported and skipped; the
/// rest of the documents are still extracted. Within a unit, move chains
/// come before scout runs and steps keep their report order.
pub fn flatten(documents: &[Document]) -> (Vec<ObservationEvent>, Vec<Diagnostic>) {
    let mut events = Vec::new();
    let mut errors = Vec::new();

    for document in documents {
        let label = document.label();
        let turn = match TurnId::parse(&document.turn) {
            Ok(turn) => turn,
            Err(err) => {
                errors.push(Diagnostic::new(label, err));
                continue;
            }
        };

        for clan_report in &document.clans {
            let clan = match ClanId::parse(&clan_report.id) {
                Ok(clan) => clan,
                Err(err) => {
                    errors.push(Diagnostic::new(label.clone(), err));
                    continue;
                }
            };

            for unit in &clan_report.units {
                let actor = UnitId::new(unit.id.as_str());
                let mut sink = Sink {
                    turn,
                    clan: &clan,
                    unit: &actor,
                    events: &mut events,
                    errors: &mut errors,
                };

                for (n, chain) in unit.moves.iter().enumerate() {
                    let context = format!("{label}: unit {}: move {}", unit.id, n + 1);
                    sink.chain(&context, &actor, chain.from.as_deref(), &chain.steps, false);
                }

                for (n, run) in unit.scouts.iter().enumerate() {
                    let actor = if run.id.is_empty() {
                        UnitId::new(format!("{}s{}", unit.id, n + 1))
                    } else {
                        UnitId::new(run.id.as_str())
                    };
                    let context = format!("{label}: unit {}: scout {actor}", unit.id);
                    sink.chain(&context, &actor, run.from.as_deref(), &run.steps, true);
                }
            }
        }
    }

    tracing::debug!(
        documents = documents.len(),
        events = events.len(),
        errors = errors.len(),
        "flattened documents"
    );
    (events, errors)
}

struct Sink<'a> {
    turn: TurnId,
    clan: &'a ClanId,
    unit: &'a UnitId,
    events: &'a mut Vec<ObservationEvent>,
    errors: &'a mut Vec<Diagnostic>,
}

impl Sink<'_> {
    fn chain(
        &mut self,
        context: &str,
        actor: &UnitId,
        from: Option<&str>,
        steps: &[Step],
        scouting: bool,
    ) {
        let mut previous = match from.filter(|from| !from.is_empty()) {
            None => None,
            Some(from) => match LinearCoord::parse_grid(from) {
                Ok(at) => Some(at),
                Err(err) => {
                    self.errors
                        .push(Diagnostic::new(format!("{context}: start"), err));
                    None
                }
            },
        };

        for (n, step) in steps.iter().enumerate() {
            let resolved = resolve_step(previous, step);
            previous = resolved.as_ref().ok().copied();

            let Some(observation) = &step.observation else {
                continue;
            };
            match resolved {
                Ok(location) => self.events.push(ObservationEvent {
                    turn: self.turn,
                    clan: self.clan.clone(),
                    unit: self.unit.clone(),
                    actor: actor.clone(),
                    location,
                    observation: observation.clone(),
                    was_visited: observation.was_visited,
                    was_scouted: scouting || observation.was_scouted,
                }),
                Err(err) => self
                    .errors
                    .push(Diagnostic::new(format!("{context}: step {}", n + 1), err)),
            }
        }
    }
}

/// Where a step ended: its own grid string when given, otherwise one hex
/// from `previous` in the step's direction (or `previous` itself for a unit
/// that stood still).
fn resolve_step(previous: Option<LinearCoord>, step: &Step) -> Result<LinearCoord, MapError> {
    if !step.ending.is_empty() {
        return Ok(LinearCoord::parse_grid(&step.ending)?);
    }
    match (step.intent, step.direction.as_deref(), previous) {
        (Intent::Still, _, Some(at)) => Ok(at),
        (_, Some(code), Some(at)) => Ok(at.step(Direction::parse(code)?)),
        _ => Err(CoordinateError::Missing.into()),
    }
}
