use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Columns in one lettered grid cell.
pub const GRID_COLUMNS: i32 = 30;
/// Rows in one lettered grid cell.
pub const GRID_ROWS: i32 = 21;

/// Literal used by reports for "no location".
pub const NO_LOCATION: &str = "N/A";

const GRID_LETTERS: i32 = 26;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("no location ({NO_LOCATION:?})")]
    NoLocation,
    #[error("missing coordinate")]
    Missing,
    #[error("{0:?}: expected 7 characters")]
    Length(String),
    #[error("{0:?}: expected a space at index 2")]
    Separator(String),
    #[error("{0:?}: grid letters must be A-Z")]
    GridLetter(String),
    #[error("{0:?}: column must be 01-30")]
    Column(String),
    #[error("{0:?}: row must be 01-21")]
    Row(String),
}

/// Zero-based map position. Columns grow to the right, rows grow downward.
///
/// This is the working form for ordering, hashing and bounding boxes. The
/// `"RR CCRR"` grid string is only an exchange format.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LinearCoord {
    pub column: i32,
    pub row: i32,
}

impl LinearCoord {
    pub const ZERO: LinearCoord = LinearCoord { column: 0, row: 0 };

    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Parse a `"RR CCRR"` grid string.
    ///
    /// Letters are accepted in either case. `"N/A"` is rejected with
    /// [`CoordinateError::NoLocation`].
    pub fn parse_grid(grid: &str) -> Result<Self, CoordinateError> {
        if grid == NO_LOCATION {
            return Err(CoordinateError::NoLocation);
        }
        if grid.is_empty() {
            return Err(CoordinateError::Missing);
        }
        let chars: Vec<char> = grid.chars().collect();
        if chars.len() != 7 {
            return Err(CoordinateError::Length(grid.to_string()));
        }
        if chars[2] != ' ' {
            return Err(CoordinateError::Separator(grid.to_string()));
        }

        let letter = |c: char| -> Result<i32, CoordinateError> {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() {
                Ok(c as i32 - 'A' as i32)
            } else {
                Err(CoordinateError::GridLetter(grid.to_string()))
            }
        };
        let grid_row = letter(chars[0])?;
        let grid_column = letter(chars[1])?;

        let column = two_digits(&chars[3..5])
            .filter(|n| (1..=GRID_COLUMNS).contains(n))
            .ok_or_else(|| CoordinateError::Column(grid.to_string()))?;
        let row = two_digits(&chars[5..7])
            .filter(|n| (1..=GRID_ROWS).contains(n))
            .ok_or_else(|| CoordinateError::Row(grid.to_string()))?;

        Ok(Self {
            column: grid_column * GRID_COLUMNS + column - 1,
            row: grid_row * GRID_ROWS + row - 1,
        })
    }

    /// Format as a `"RR CCRR"` grid string, or `None` when the coordinate
    /// lies outside the lettered grid (negative, or past `ZZ`).
    pub fn to_grid(self) -> Option<String> {
        if self.column < 0 || self.row < 0 {
            return None;
        }
        let grid_column = self.column / GRID_COLUMNS;
        let grid_row = self.row / GRID_ROWS;
        if grid_column >= GRID_LETTERS || grid_row >= GRID_LETTERS {
            return None;
        }
        Some(format!(
            "{}{} {:02}{:02}",
            char::from(b'A' + grid_row as u8),
            char::from(b'A' + grid_column as u8),
            self.column % GRID_COLUMNS + 1,
            self.row % GRID_ROWS + 1,
        ))
    }

    /// Column of the left edge of the lettered cell holding this coordinate.
    #[inline]
    pub fn grid_floor_column(self) -> i32 {
        self.column.div_euclid(GRID_COLUMNS) * GRID_COLUMNS
    }

    /// Row of the top edge of the lettered cell holding this coordinate.
    #[inline]
    pub fn grid_floor_row(self) -> i32 {
        self.row.div_euclid(GRID_ROWS) * GRID_ROWS
    }
}

impl std::ops::Sub for LinearCoord {
    type Output = LinearCoord;

    fn sub(self, other: LinearCoord) -> LinearCoord {
        LinearCoord {
            column: self.column - other.column,
            row: self.row - other.row,
        }
    }
}

impl fmt::Display for LinearCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_grid() {
            Some(grid) => f.write_str(&grid),
            None => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

impl std::str::FromStr for LinearCoord {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_grid(s)
    }
}

fn two_digits(chars: &[char]) -> Option<i32> {
    match chars {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some((*a as i32 - '0' as i32) * 10 + (*b as i32 - '0' as i32))
        }
        _ => None,
    }
}
