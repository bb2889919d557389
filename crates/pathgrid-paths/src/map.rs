//! The static cost field searched by [`PathFinder`](crate::PathFinder).
//!
//! A [`GridMap`] is built once from buildings and wall rows and never
//! changes afterwards, so one map can serve any number of searches, on any
//! number of threads.

use pathgrid_core::{Point, Range};

use crate::astar::PathFinder;
use crate::config::{Building, validate_parts};
use crate::coords::{grid_size, logical_rect, logical_to_grid};
use crate::distance::octile;
use crate::error::MapError;
use crate::neighbors::{Direction, ORTHOGONAL_COST};
use crate::path::Path;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost value of a cell that can never be entered.
pub const IMPASSABLE: u8 = u8::MAX;

/// Highest wall weight, written as `Z` in a wall row.
pub const MAX_WALL_WEIGHT: u8 = 26;

/// Wall weight encoded by a wall-row character, if any.
#[inline]
pub fn wall_weight(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A' + 1),
        _ => None,
    }
}

#[inline]
fn is_wall(v: u8) -> bool {
    v != 0 && v != IMPASSABLE
}

/// An immutable traversal-cost field on the double-resolution grid.
///
/// Every cell holds `0` (free), a wall weight in `1..=26`, or [`IMPASSABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    logical: Point,
    bounds: Range,
    cells: Vec<u8>,
}

impl GridMap {
    /// Build a map of `width` × `height` logical cells.
    ///
    /// The border is set first, then buildings in order, then wall rows.
    /// Nothing is returned unless every step succeeds.
    pub fn new<S: AsRef<str>>(
        width: i32,
        height: i32,
        buildings: &[Building],
        walls: &[S],
    ) -> Result<Self, MapError> {
        validate_parts(width, height, buildings)?;

        let mut b = Builder::new(width, height);
        b.border();
        for building in buildings {
            b.building(building)?;
        }
        if walls.len() > height as usize {
            return Err(MapError::OutOfBounds {
                what: "wall rows",
                x: 0,
                y: height,
                size: walls.len() as i32,
            });
        }
        for (row, line) in walls.iter().enumerate() {
            b.wall_row(row as i32, line.as_ref())?;
        }

        let map = b.finish();
        log::debug!(
            "built {}x{} grid map from {}x{} logical cells: {} buildings, {} wall rows",
            map.width(),
            map.height(),
            width,
            height,
            buildings.len(),
            walls.len()
        );
        Ok(map)
    }

    /// Grid width, border included.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Grid height, border included.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Size in logical cells, as given to [`new`](Self::new).
    #[inline]
    pub fn logical_size(&self) -> Point {
        self.logical
    }

    /// All valid grid positions.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Cost value at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u8> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Cost value at `p`; [`IMPASSABLE`] for buildings and the border.
    pub fn cell(&self, p: Point) -> Result<u8, MapError> {
        self.get(p).ok_or(MapError::PositionOutOfBounds { pos: p })
    }

    /// Whether a path may pass through `p`.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.get(p).is_some_and(|v| v != IMPASSABLE)
    }

    /// Which of the eight steps out of `p` are impossible, indexed in
    /// [`Direction::ALL`] order.
    pub fn blocked(&self, p: Point) -> Result<[bool; 8], MapError> {
        self.cell(p)?;
        Ok(Direction::ALL.map(|d| !self.is_passable(p + d.offset())))
    }

    /// Cost of the single step `from` → `to`.
    ///
    /// The base cost (5 straight, 7 diagonal) is paid once, plus once more
    /// per point of wall weight on `to`. Returns `None` if the cells are not
    /// adjacent or `to` cannot be entered.
    pub fn step_cost(&self, from: Point, to: Point) -> Option<i32> {
        let dir = Direction::between(from, to)?;
        let weight = self.get(to).filter(|&v| v != IMPASSABLE)?;
        let base = dir.step_cost();
        Some(base + base * i32::from(weight))
    }

    /// Search for a path with at most `budget` nodes.
    ///
    /// Each call uses its own scratch arena; use a [`PathFinder`] directly to
    /// reuse one across queries.
    pub fn find_path(&self, from: Point, to: Point, budget: usize) -> Result<Path, MapError> {
        PathFinder::new(self.bounds).path(self, from, to, budget)
    }
}

impl Pather for GridMap {
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }
}

impl WeightedPather for GridMap {
    fn cost(&self, from: Point, to: Point) -> i32 {
        let base = Direction::between(from, to).map_or(ORTHOGONAL_COST, Direction::step_cost);
        let weight = self.get(to).filter(|&v| v != IMPASSABLE).unwrap_or(0);
        base + base * i32::from(weight)
    }
}

impl AstarPather for GridMap {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Scratch buffer for a map under construction. Dropped on failure.
struct Builder {
    logical: Point,
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Builder {
    fn new(width: i32, height: i32) -> Self {
        let (w, h) = (grid_size(width), grid_size(height));
        Self {
            logical: Point::new(width, height),
            width: w,
            height: h,
            cells: vec![0; (w * h) as usize],
        }
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    fn interior(&self) -> Range {
        Range {
            min: Point::new(1, 1),
            max: Point::new(self.width - 1, self.height - 1),
        }
    }

    fn border(&mut self) {
        let full = Range::new(0, 0, self.width, self.height);
        let interior = self.interior();
        for p in full {
            if !interior.contains(p) {
                let i = self.index(p);
                self.cells[i] = IMPASSABLE;
            }
        }
    }

    fn building(&mut self, b: &Building) -> Result<(), MapError> {
        let rect = logical_rect(Point::new(b.x, b.y), b.size);
        if !rect.in_range(self.interior()) {
            return Err(MapError::OutOfBounds {
                what: "building",
                x: b.x,
                y: b.y,
                size: b.size,
            });
        }
        for p in rect {
            let i = self.index(p);
            if self.cells[i] != 0 {
                return Err(MapError::ConstructionConflict { x: p.x, y: p.y });
            }
            self.cells[i] = IMPASSABLE;
        }
        Ok(())
    }

    fn wall_row(&mut self, row: i32, line: &str) -> Result<(), MapError> {
        let len = line.chars().count() as i32;
        if len > self.logical.x {
            return Err(MapError::OutOfBounds {
                what: "wall row",
                x: 0,
                y: row,
                size: len,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let Some(weight) = wall_weight(ch) else {
                continue;
            };
            let col = col as i32;
            let seam = logical_to_grid(Point::new(col, row));
            self.wall(seam, weight)?;
            // Bridge to the neighbouring segment so the wall has no gaps.
            if col > 0 && is_wall(self.at(seam.shift(-2, 0))) {
                self.wall(seam.shift(-1, 0), weight)?;
            }
            if row > 0 && is_wall(self.at(seam.shift(0, -2))) {
                self.wall(seam.shift(0, -1), weight)?;
            }
        }
        Ok(())
    }

    #[inline]
    fn at(&self, p: Point) -> u8 {
        self.cells[self.index(p)]
    }

    /// Put a wall weight on `p`. Walls may overlap walls (the heavier one
    /// stays), never impassable cells.
    fn wall(&mut self, p: Point, weight: u8) -> Result<(), MapError> {
        let i = self.index(p);
        match self.cells[i] {
            0 => self.cells[i] = weight,
            IMPASSABLE => return Err(MapError::ConstructionConflict { x: p.x, y: p.y }),
            old => self.cells[i] = old.max(weight),
        }
        Ok(())
    }

    fn finish(self) -> GridMap {
        GridMap {
            logical: self.logical,
            bounds: Range::new(0, 0, self.width, self.height),
            cells: self.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_WALLS: &[&str] = &[];

    fn empty(w: i32, h: i32) -> GridMap {
        GridMap::new(w, h, &[], NO_WALLS).unwrap()
    }

    #[test]
    fn dimensions_are_doubled_and_padded() {
        let m = empty(3, 2);
        assert_eq!(m.width(), 8);
        assert_eq!(m.height(), 6);
        assert_eq!(m.logical_size(), Point::new(3, 2));
        assert_eq!(m.bounds(), Range::new(0, 0, 8, 6));
    }

    #[test]
    fn border_is_impassable_interior_free() {
        let m = empty(3, 3);
        for p in m.bounds() {
            let on_border = p.x == 0 || p.y == 0 || p.x == 7 || p.y == 7;
            let v = m.cell(p).unwrap();
            if on_border {
                assert_eq!(v, IMPASSABLE, "{p}");
            } else {
                assert_eq!(v, 0, "{p}");
            }
        }
    }

    #[test]
    fn query_outside_grid_fails() {
        let m = empty(3, 3);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(8, 0),
            Point::new(0, 8),
            Point::new(8, 8),
        ] {
            assert_eq!(m.cell(p), Err(MapError::PositionOutOfBounds { pos: p }));
        }
        assert!(m.cell(Point::new(7, 7)).is_ok());
    }

    #[test]
    fn building_covers_doubled_rectangle() {
        let m = GridMap::new(4, 4, &[Building::new(1, 2, 2)], NO_WALLS).unwrap();
        let covered = Range::new(3, 5, 7, 9);
        for p in Range::new(1, 1, 9, 9) {
            let expected = if covered.contains(p) { IMPASSABLE } else { 0 };
            assert_eq!(m.cell(p).unwrap(), expected, "{p}");
        }
    }

    #[test]
    fn building_at_map_edge_fits() {
        assert!(GridMap::new(3, 3, &[Building::new(2, 2, 1)], NO_WALLS).is_ok());
        assert!(GridMap::new(3, 3, &[Building::new(0, 0, 3)], NO_WALLS).is_ok());
    }

    #[test]
    fn building_out_of_map() {
        for b in [
            Building::new(3, 0, 1),
            Building::new(2, 2, 2),
            Building::new(-1, 0, 1),
            Building::new(0, -1, 2),
        ] {
            let err = GridMap::new(3, 3, &[b], NO_WALLS).unwrap_err();
            assert_eq!(
                err,
                MapError::OutOfBounds {
                    what: "building",
                    x: b.x,
                    y: b.y,
                    size: b.size
                }
            );
        }
    }

    #[test]
    fn overlapping_buildings_conflict() {
        let res = GridMap::new(
            5,
            5,
            &[Building::new(1, 1, 2), Building::new(2, 2, 1)],
            NO_WALLS,
        );
        assert!(matches!(res, Err(MapError::ConstructionConflict { .. })));
    }

    #[test]
    fn same_cell_twice_conflicts() {
        let res = GridMap::new(
            5,
            5,
            &[Building::new(2, 2, 1), Building::new(2, 2, 1)],
            NO_WALLS,
        );
        assert_eq!(res, Err(MapError::ConstructionConflict { x: 5, y: 5 }));
    }

    #[test]
    fn adjacent_buildings_do_not_conflict() {
        let m = GridMap::new(
            5,
            5,
            &[Building::new(1, 1, 1), Building::new(2, 1, 1)],
            NO_WALLS,
        )
        .unwrap();
        assert_eq!(m.cell(Point::new(4, 3)).unwrap(), IMPASSABLE);
        assert_eq!(m.cell(Point::new(5, 3)).unwrap(), IMPASSABLE);
    }

    #[test]
    fn wall_letter_sets_seam_weight() {
        let m = GridMap::new(2, 2, &[], &["B"]).unwrap();
        assert_eq!(m.cell(Point::new(1, 1)).unwrap(), 2);
        let others = m.bounds().iter().filter(|&p| is_wall(m.get(p).unwrap())).count();
        assert_eq!(others, 1);
    }

    #[test]
    fn wall_weights_span_alphabet() {
        assert_eq!(wall_weight('A'), Some(1));
        assert_eq!(wall_weight('Z'), Some(MAX_WALL_WEIGHT));
        assert_eq!(wall_weight('a'), None);
        assert_eq!(wall_weight('.'), None);
        assert_eq!(wall_weight(' '), None);
    }

    #[test]
    fn non_letters_are_free() {
        let m = GridMap::new(3, 2, &[], &[".x-", "  ?"]).unwrap();
        for p in Range::new(1, 1, 7, 5) {
            assert_eq!(m.cell(p).unwrap(), 0, "{p}");
        }
    }

    #[test]
    fn horizontal_wall_is_bridged() {
        let m = GridMap::new(4, 1, &[], &[".CC"]).unwrap();
        assert_eq!(m.cell(Point::new(3, 1)).unwrap(), 3);
        assert_eq!(m.cell(Point::new(4, 1)).unwrap(), 3);
        assert_eq!(m.cell(Point::new(5, 1)).unwrap(), 3);
        // nothing bridges to the free seam on the left
        assert_eq!(m.cell(Point::new(2, 1)).unwrap(), 0);
        assert_eq!(m.cell(Point::new(1, 1)).unwrap(), 0);
    }

    #[test]
    fn vertical_wall_is_bridged_with_later_weight() {
        let m = GridMap::new(2, 3, &[], &["A", "D", ".."]).unwrap();
        assert_eq!(m.cell(Point::new(1, 1)).unwrap(), 1);
        assert_eq!(m.cell(Point::new(1, 2)).unwrap(), 4);
        assert_eq!(m.cell(Point::new(1, 3)).unwrap(), 4);
        assert_eq!(m.cell(Point::new(1, 4)).unwrap(), 0);
    }

    #[test]
    fn wall_on_building_conflicts() {
        let res = GridMap::new(3, 3, &[Building::new(1, 1, 1)], &["", ".A"]);
        assert_eq!(res, Err(MapError::ConstructionConflict { x: 3, y: 3 }));
    }

    #[test]
    fn wall_bridge_into_building_conflicts() {
        let mut b = Builder::new(3, 1);
        b.border();
        b.wall(Point::new(1, 1), 1).unwrap();
        let i = b.index(Point::new(2, 1));
        b.cells[i] = IMPASSABLE;
        assert_eq!(
            b.wall_row(0, "AA"),
            Err(MapError::ConstructionConflict { x: 2, y: 1 })
        );
    }

    #[test]
    fn too_many_or_too_long_wall_rows() {
        assert!(matches!(
            GridMap::new(2, 1, &[], &["A", "A"]),
            Err(MapError::OutOfBounds { what: "wall rows", .. })
        ));
        assert!(matches!(
            GridMap::new(2, 2, &[], &["AAA"]),
            Err(MapError::OutOfBounds { what: "wall row", .. })
        ));
    }

    #[test]
    fn configuration_checked_before_placement() {
        let res = GridMap::new(-3, 3, &[Building::new(9, 9, 1)], NO_WALLS);
        assert!(matches!(res, Err(MapError::Configuration { .. })));
    }

    #[test]
    fn blocked_directions() {
        let m = GridMap::new(2, 2, &[Building::new(1, 0, 1)], NO_WALLS).unwrap();
        // (2,1) is next to the top border and to the building on its right.
        let b = m.blocked(Point::new(2, 1)).unwrap();
        assert_eq!(b, [true, true, true, true, true, false, false, false]);
        let open = m.blocked(Point::new(2, 3)).unwrap();
        assert_eq!(open, [false, false, true, false, false, false, false, false]);
        assert!(m.blocked(Point::new(-1, 0)).is_err());
    }

    #[test]
    fn step_costs_follow_weights() {
        let m = GridMap::new(2, 2, &[], &["B"]).unwrap();
        assert_eq!(m.step_cost(Point::new(2, 2), Point::new(3, 2)), Some(5));
        assert_eq!(m.step_cost(Point::new(2, 2), Point::new(3, 3)), Some(7));
        assert_eq!(m.step_cost(Point::new(2, 1), Point::new(1, 1)), Some(5 + 5 * 2));
        assert_eq!(m.step_cost(Point::new(2, 2), Point::new(1, 1)), Some(7 + 7 * 2));
        assert_eq!(m.step_cost(Point::new(1, 1), Point::new(0, 1)), None);
        assert_eq!(m.step_cost(Point::new(1, 1), Point::new(3, 1)), None);
        assert_eq!(m.cost(Point::new(2, 1), Point::new(1, 1)), 15);
    }

    #[test]
    fn map_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridMap>();
    }
}
