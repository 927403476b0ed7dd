use hexfold_protocol::{Direction, LinearCoord, GRID_COLUMNS, GRID_ROWS};
use proptest::prelude::*;

fn grid_string() -> impl Strategy<Value = String> {
    (
        proptest::char::range('A', 'Z'),
        proptest::char::range('A', 'Z'),
        1..=GRID_COLUMNS,
        1..=GRID_ROWS,
    )
        .prop_map(|(row, column, sub_column, sub_row)| {
            format!("{row}{column} {sub_column:02}{sub_row:02}")
        })
}

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..6).prop_map(|i| Direction::ALL[i])
}

proptest! {
    #[test]
    fn grid_strings_round_trip(grid in grid_string()) {
        let coord = LinearCoord::parse_grid(&grid).unwrap();
        prop_assert_eq!(coord.to_grid(), Some(grid));
    }

    #[test]
    fn lower_case_grid_strings_normalize(grid in grid_string()) {
        let coord = LinearCoord::parse_grid(&grid.to_lowercase()).unwrap();
        prop_assert_eq!(coord.to_grid(), Some(grid));
    }

    #[test]
    fn walking_is_repeated_stepping(
        column in -100i32..900,
        row in -100i32..600,
        path in proptest::collection::vec(direction(), 0..24),
    ) {
        let start = LinearCoord::new(column, row);
        let stepped = path.iter().fold(start, |at, d| at.step(*d));
        prop_assert_eq!(start.walk(path.iter().copied()), stepped);
        prop_assert!(start.hex_distance(stepped) <= path.len() as i32);
    }
}
