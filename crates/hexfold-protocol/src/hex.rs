use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{LinearCoord, MapError};

/// One of the six neighbors of a flat-top hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    pub fn parse(code: &str) -> Result<Self, MapError> {
        match code {
            "N" => Ok(Direction::North),
            "NE" => Ok(Direction::NorthEast),
            "SE" => Ok(Direction::SouthEast),
            "S" => Ok(Direction::South),
            "SW" => Ok(Direction::SouthWest),
            "NW" => Ok(Direction::NorthWest),
            other => Err(MapError::Direction(other.to_string())),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Direction::parse(&code).map_err(serde::de::Error::custom)
    }
}

/// Cube coordinates for a flat-top hex grid, stored as axial `(q, r)`.
/// The implicit third axis is `s = -q - r`.
///
/// Map columns are laid out with odd columns shoved half a hex down, so
/// moving on the map needs two parity-dependent offset tables. In cube
/// space every direction is a single constant vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i32,
    pub r: i32,
}

impl Cube {
    /// Indexed by [`Direction::index`].
    pub const DIRECTIONS: [Cube; 6] = [
        Cube { q: 0, r: -1 },  // North
        Cube { q: 1, r: -1 },  // Northeast
        Cube { q: 1, r: 0 },   // Southeast
        Cube { q: 0, r: 1 },   // South
        Cube { q: -1, r: 1 },  // Southwest
        Cube { q: -1, r: 0 },  // Northwest
    ];

    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    pub fn from_linear(coord: LinearCoord) -> Self {
        let q = coord.column;
        Cube {
            q,
            r: coord.row - (q - (q & 1)) / 2,
        }
    }

    pub fn to_linear(self) -> LinearCoord {
        LinearCoord {
            column: self.q,
            row: self.r + (self.q - (self.q & 1)) / 2,
        }
    }

    #[inline]
    pub fn neighbor(self, direction: Direction) -> Cube {
        self + Self::DIRECTIONS[direction.index()]
    }

    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s() - other.s()).abs()) / 2
    }
}

impl std::ops::Add for Cube {
    type Output = Cube;

    fn add(self, other: Cube) -> Cube {
        Cube {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl LinearCoord {
    /// The neighboring map position one hex away in `direction`.
    pub fn step(self, direction: Direction) -> LinearCoord {
        Cube::from_linear(self).neighbor(direction).to_linear()
    }

    /// Follow `directions` one hex at a time.
    pub fn walk<I>(self, directions: I) -> LinearCoord
    where
        I: IntoIterator<Item = Direction>,
    {
        directions
            .into_iter()
            .fold(Cube::from_linear(self), Cube::neighbor)
            .to_linear()
    }

    /// Number of single steps between two map positions.
    pub fn hex_distance(self, other: LinearCoord) -> i32 {
        Cube::from_linear(self).distance(Cube::from_linear(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Offset vectors as (column, row) deltas, in `Direction::ALL` order.
    const EVEN_COLUMN: [(i32, i32); 6] = [(0, -1), (1, -1), (1, 0), (0, 1), (-1, 0), (-1, -1)];
    const ODD_COLUMN: [(i32, i32); 6] = [(0, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0)];

    fn table_step(from: LinearCoord, direction: Direction) -> LinearCoord {
        let table = if from.column.rem_euclid(2) == 0 {
            EVEN_COLUMN
        } else {
            ODD_COLUMN
        };
        let (dc, dr) = table[direction.index()];
        LinearCoord::new(from.column + dc, from.row + dr)
    }

    #[test]
    fn cube_round_trips_linear() {
        for column in -5..40 {
            for row in -5..30 {
                let coord = LinearCoord::new(column, row);
                assert_eq!(Cube::from_linear(coord).to_linear(), coord);
            }
        }
    }

    #[test]
    fn cube_step_matches_parity_tables() {
        for column in -4..8 {
            for row in -4..8 {
                let from = LinearCoord::new(column, row);
                for direction in Direction::ALL {
                    assert_eq!(
                        from.step(direction),
                        table_step(from, direction),
                        "{from:?} {direction}"
                    );
                }
            }
        }
    }

    #[test]
    fn walk_equals_repeated_steps() {
        let start = LinearCoord::new(7, 3);
        let path = [
            Direction::NorthEast,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::South,
            Direction::NorthWest,
        ];
        let stepped = path.iter().fold(start, |at, d| at.step(*d));
        assert_eq!(start.walk(path), stepped);
    }

    #[test]
    fn opposite_steps_cancel() {
        let start = LinearCoord::new(10, 10);
        assert_eq!(
            start.walk([Direction::NorthEast, Direction::SouthWest]),
            start
        );
        assert_eq!(start.walk([Direction::North, Direction::South]), start);
        assert_eq!(
            start.walk([Direction::NorthWest, Direction::SouthEast]),
            start
        );
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let center = LinearCoord::new(3, 3);
        for direction in Direction::ALL {
            assert_eq!(center.hex_distance(center.step(direction)), 1);
        }
    }

    #[test]
    fn direction_codes_parse() {
        for direction in Direction::ALL {
            assert_eq!(Direction::parse(direction.code()), Ok(direction));
        }
        assert_eq!(
            Direction::parse("E"),
            Err(MapError::Direction("E".to_string()))
        );
    }
}
