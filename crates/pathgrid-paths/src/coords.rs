//! Mapping between logical map cells and search-grid cells.
//!
//! The search grid has twice the logical resolution plus a one-cell border:
//! logical cell `(x, y)` covers grid cells `2x+1..=2x+2` × `2y+1..=2y+2`.
//! A wall segment for logical cell `(x, y)` sits on its top-left grid cell,
//! so walls live between the cells they separate.

use pathgrid_core::{Point, Range};

/// Grid side length for a logical side length.
#[inline]
pub const fn grid_size(logical: i32) -> i32 {
    logical * 2 + 2
}

/// The top-left grid cell of logical cell `p`.
#[inline]
pub const fn logical_to_grid(p: Point) -> Point {
    Point::new(p.x * 2 + 1, p.y * 2 + 1)
}

/// Grid cells covered by a logical square of side `size` at `p`.
#[inline]
pub fn logical_rect(p: Point, size: i32) -> Range {
    let min = logical_to_grid(p);
    Range {
        min,
        max: min.shift(size * 2, size * 2),
    }
}

/// The logical cell a grid cell belongs to, given the logical map size.
///
/// Returns `None` for the padded border and anything beyond it.
pub fn grid_to_logical(p: Point, logical_size: Point) -> Option<Point> {
    let interior = Range {
        min: Point::new(1, 1),
        max: logical_to_grid(logical_size),
    };
    if !interior.contains(p) {
        return None;
    }
    Some(Point::new((p.x - 1) / 2, (p.y - 1) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(grid_size(3), 8);
        assert_eq!(grid_size(1), 4);
    }

    #[test]
    fn rect_covers_doubled_cells() {
        let r = logical_rect(Point::new(1, 0), 2);
        assert_eq!(r.min, Point::new(3, 1));
        assert_eq!(r.max, Point::new(7, 5));
        // inclusive upper corner is (2x+2s, 2y+2s)
        assert!(r.contains(Point::new(6, 4)));
        assert_eq!(r.len(), 16);
    }

    #[test]
    fn round_trip_through_grid() {
        let size = Point::new(3, 2);
        for p in Range::new(0, 0, 3, 2) {
            let g = logical_to_grid(p);
            assert_eq!(grid_to_logical(g, size), Some(p));
            assert_eq!(grid_to_logical(g.shift(1, 1), size), Some(p));
        }
    }

    #[test]
    fn border_has_no_logical_cell() {
        let size = Point::new(3, 3);
        assert_eq!(grid_to_logical(Point::new(0, 4), size), None);
        assert_eq!(grid_to_logical(Point::new(7, 4), size), None);
        assert_eq!(grid_to_logical(Point::new(4, 7), size), None);
        assert_eq!(grid_to_logical(Point::new(6, 6), size), Some(Point::new(2, 2)));
    }
}
