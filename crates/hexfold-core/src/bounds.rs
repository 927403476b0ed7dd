use hexfold_protocol::LinearCoord;
use serde::Serialize;

use crate::TileMap;

/// Hexes of empty space kept around the explored area.
pub const DEFAULT_BORDER: i32 = 4;

/// The explored area and the shift that moves it into render space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub upper_left: LinearCoord,
    pub lower_right: LinearCoord,
    /// Subtracted from every location to get its render position.
    pub offset: LinearCoord,
}

impl Bounds {
    pub fn render_at(&self, location: LinearCoord) -> LinearCoord {
        location - self.offset
    }

    pub fn contains(&self, location: LinearCoord) -> bool {
        (self.upper_left.column..=self.lower_right.column).contains(&location.column)
            && (self.upper_left.row..=self.lower_right.row).contains(&location.row)
    }
}

/// Bounding box of all tiles and the render offset.
///
/// The offset backs off `border` hexes from the upper-left corner but never
/// past the edge of the lettered grid cell holding that corner, and is
/// rounded down to an even number when that stays inside the same cell.
/// An empty map yields all zeros.
pub fn compute_bounds(tiles: &TileMap, border: i32) -> Bounds {
    let mut locations = tiles.locations();
    let Some(first) = locations.next() else {
        return Bounds::default();
    };

    let (upper_left, lower_right) = locations.fold((first, first), |(ul, lr), at| {
        (
            LinearCoord::new(ul.column.min(at.column), ul.row.min(at.row)),
            LinearCoord::new(lr.column.max(at.column), lr.row.max(at.row)),
        )
    });

    let offset = LinearCoord::new(
        axis_offset(upper_left.column, upper_left.grid_floor_column(), border),
        axis_offset(upper_left.row, upper_left.grid_floor_row(), border),
    );

    tracing::debug!(%upper_left, %lower_right, ?offset, "computed bounds");
    Bounds {
        upper_left,
        lower_right,
        offset,
    }
}

fn axis_offset(min: i32, floor: i32, border: i32) -> i32 {
    let offset = (min - border).max(floor);
    if offset.rem_euclid(2) == 1 && offset - 1 >= floor {
        offset - 1
    } else {
        offset
    }
}
