use std::cmp::Ordering;

use hexfold_protocol::ClanId;

use crate::ObservationEvent;

/// Stable sort into merge order: by turn, then other clans before the
/// owning clan, then clan id, then reporting unit id.
///
/// The owning clan's reports land last within a turn so third-party
/// sightings never overwrite them. Scout runs sort under their parent
/// unit, so equal keys keep extraction order: a unit's moves, then its
/// scout runs.
pub fn sort_events(events: &mut [ObservationEvent], owning_clan: &ClanId) {
    events.sort_by(|a, b| merge_order(a, b, owning_clan));
}

fn merge_order(a: &ObservationEvent, b: &ObservationEvent, owning_clan: &ClanId) -> Ordering {
    a.turn
        .cmp(&b.turn)
        .then_with(|| (a.clan == *owning_clan).cmp(&(b.clan == *owning_clan)))
        .then_with(|| a.clan.cmp(&b.clan))
        .then_with(|| a.unit.cmp(&b.unit))
}
