use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexfold_core::{sort_events, ObservationEvent, TileMap};
use hexfold_protocol::{ClanId, LinearCoord, Observation, Settlement, TurnId, UnitId};

const TERRAIN: [&str; 4] = ["PR", "BH", "O", "GH"];

fn synthetic_events(count: usize) -> Vec<ObservationEvent> {
    let clans = ["0138", "0500", "0987"].map(|id| ClanId::parse(id).expect("clan"));
    (0..count)
        .map(|i| {
            let clan = &clans[i % clans.len()];
            let unit = UnitId::new(format!("1{}e{}", &clan.as_str()[1..], i % 7));
            ObservationEvent {
                turn: TurnId::parse(&format!("0901-{:02}", i % 12 + 1)).expect("turn"),
                clan: clan.clone(),
                actor: unit.clone(),
                unit,
                location: LinearCoord::new((i * 7 % 60) as i32, (i * 13 % 42) as i32),
                observation: Observation {
                    terrain: TERRAIN[i % TERRAIN.len()].to_string(),
                    settlements: (i % 5 == 0).then(|| {
                        vec![Settlement {
                            name: format!("Village {i}"),
                        }]
                    }),
                    ..Observation::default()
                },
                was_visited: i % 3 == 0,
                was_scouted: i % 4 == 0,
            }
        })
        .collect()
}

fn bench_sort_and_merge(c: &mut Criterion) {
    let owning = ClanId::parse("0138").expect("clan");
    let events = synthetic_events(10_000);

    c.bench_function("hexfold-core/sort+merge(events=10000)", |b| {
        b.iter(|| {
            let mut events = events.clone();
            sort_events(&mut events, &owning);
            let tiles = TileMap::merge(&events);
            black_box(tiles.len());
        })
    });
}

criterion_group!(benches, bench_sort_and_merge);
criterion_main!(benches);
