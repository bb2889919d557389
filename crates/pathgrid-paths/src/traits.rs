use pathgrid_core::Point;

/// Minimal pathfinding interface: which cells may be entered.
pub trait Pather {
    /// Whether a step may end on `p`. Cells outside the searched bounds are
    /// filtered by the search itself.
    fn passable(&self, p: Point) -> bool;
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent, passable `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
