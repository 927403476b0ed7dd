use hexfold_core::{render, CollectingRenderer, Failure, Pipeline, Stage};
use hexfold_protocol::{wire, ClanId, Direction, Document, LinearCoord, Terrain, TurnId};

fn decode(json: &str) -> Document {
    wire::deserialize_document(json.as_bytes()).expect("fixture should decode")
}

/// Owning clan 0987 and an ally, 0138, both reporting on AA 0505.
fn reports() -> Vec<Document> {
    vec![
        decode(
            r#"{
                "schema_version": "1",
                "source": "0901-01.0987.json",
                "game": "0300",
                "turn": "0901-01",
                "clan": "0987",
                "clans": [{
                    "id": "0987",
                    "units": [{
                        "id": "1987e1",
                        "ending": "AA 0505",
                        "moves": [{"steps": [{
                            "ending": "AA 0505",
                            "observation": {
                                "terrain": "PR",
                                "settlements": [{"name": "Gondor"}],
                                "encounters": [{"unit": "2138e2"}, {"unit": "0987"}],
                                "was_visited": true
                            }
                        }]}],
                        "scouts": [{
                            "id": "1987e1s1",
                            "from": "AA 0505",
                            "steps": [
                                {"intent": "scout", "direction": "S"},
                                {"intent": "scout", "direction": "SE",
                                 "observation": {"terrain": "O"}}
                            ]
                        }]
                    }]
                }],
                "special_hexes": ["GONDOR"]
            }"#,
        ),
        decode(
            r#"{
                "schema_version": "1",
                "source": "0901-01.0138.json",
                "game": "0300",
                "turn": "0901-01",
                "clan": "0138",
                "clans": [{
                    "id": "0138",
                    "units": [{
                        "id": "2138e2",
                        "ending": "AA 0505",
                        "moves": [{"steps": [{
                            "ending": "AA 0505",
                            "observation": {"terrain": "BH", "settlements": []}
                        }]}]
                    }]
                }]
            }"#,
        ),
        decode(
            r#"{
                "schema_version": "1",
                "source": "0901-02.0987.json",
                "game": "0300",
                "turn": "0901-02",
                "clan": "0987",
                "clans": [{
                    "id": "0987",
                    "units": [{
                        "id": "1987e1",
                        "ending": "AA 0505",
                        "moves": [{"steps": [{
                            "intent": "still",
                            "ending": "AA 0505",
                            "observation": {
                                "terrain": "",
                                "edges": {"N": {"feature": "River"}},
                                "notes": ["quiet"]
                            }
                        }]}]
                    }]
                }]
            }"#,
        ),
    ]
}

#[test]
fn owning_clan_reports_win_within_a_turn() {
    let docs = reports();
    let owning = ClanId::parse("0987").expect("clan");
    let outcome = Pipeline::new(owning).run(&docs).expect("run should succeed");

    let gondor_at = LinearCoord::parse_grid("AA 0505").expect("grid");
    let tile = outcome.tiles.get(gondor_at).expect("tile");
    assert_eq!(tile.terrain, "PR");
    assert_eq!(tile.notes, ["quiet"]);
    assert!(tile.was_visited);
    assert!(!tile.was_scouted);

    let hex = outcome
        .hexes
        .iter()
        .find(|hex| hex.location == gondor_at)
        .expect("hex");
    assert_eq!(hex.terrain, Terrain::Prairie);
    assert_eq!(hex.features.rivers, [Direction::North]);
    assert!(hex.features.settlements.is_empty());
    assert_eq!(hex.features.specials.len(), 1);
    assert_eq!(hex.features.specials[0].name, "GONDOR");

    let friendly: Vec<_> = hex
        .features
        .encounters
        .iter()
        .map(|e| (e.unit.as_str(), e.friendly))
        .collect();
    assert_eq!(friendly, [("2138e2", false), ("0987", true)]);
}

#[test]
fn scout_runs_resolve_directions_from_start() {
    let docs = reports();
    let outcome = Pipeline::new(ClanId::parse("0987").expect("clan"))
        .run(&docs)
        .expect("run should succeed");

    let start = LinearCoord::parse_grid("AA 0505").expect("grid");
    let seen = start.step(Direction::South).step(Direction::SouthEast);
    let tile = outcome.tiles.get(seen).expect("scouted tile");
    assert_eq!(tile.terrain, "O");
    assert!(tile.was_scouted);
    assert_eq!(outcome.hexes.len(), 2);
}

#[test]
fn frame_feeds_the_renderer() {
    let docs = reports();
    let outcome = Pipeline::new(ClanId::parse("0987").expect("clan"))
        .run(&docs)
        .expect("run should succeed");

    let map = render(CollectingRenderer::default(), &outcome.hexes, &outcome.frame)
        .expect("collecting never fails");
    assert_eq!(map.hexes, outcome.hexes);
    assert_eq!(map.frame.max_turn, TurnId::parse("0901-02").ok());
    assert_eq!(map.frame.upper_left, LinearCoord::new(4, 4));
    assert!(outcome
        .hexes
        .iter()
        .all(|hex| hex.render_at == hex.location - outcome.bounds.offset));
}

#[test]
fn ally_wins_when_it_is_the_owning_clan() {
    let docs = reports();
    let outcome = Pipeline::new(ClanId::parse("0138").expect("clan"))
        .run(&docs)
        .expect("run should succeed");

    let tile = outcome
        .tiles
        .get(LinearCoord::parse_grid("AA 0505").expect("grid"))
        .expect("tile");
    assert_eq!(tile.terrain, "BH");
    // The ally reported an explicitly empty settlement list.
    assert!(tile.settlements.is_empty());
}

#[test]
fn schema_mismatch_fails_validation() {
    let docs = reports();
    let err = Pipeline::new(ClanId::parse("0987").expect("clan"))
        .with_schema_version("2")
        .run(&docs)
        .expect_err("version 1 documents should be rejected");
    match err {
        Failure::Input { stage, diagnostics } => {
            assert_eq!(stage, Stage::Validate);
            assert_eq!(diagnostics.len(), docs.len());
        }
        Failure::Invariant(err) => panic!("unexpected invariant failure: {err}"),
    }
}
