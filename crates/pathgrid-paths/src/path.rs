use pathgrid_core::Point;

use crate::arena::{NO_PREDECESSOR, SearchArena};
use crate::distance::chebyshev;

/// The result of a path query: grid cells from the start to the terminal
/// node, both included.
///
/// The terminal is the goal when [`reached`](Self::reached) is true, and the
/// best substitute the search found otherwise.
///
/// With the `serde` feature a path can be written out but not read back:
/// only a search produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
    reached: bool,
}

impl Path {
    pub(crate) fn single(p: Point, reached: bool) -> Self {
        Self {
            points: vec![p],
            cost: 0,
            reached,
        }
    }

    /// Walk the predecessor chain back from `terminal`.
    ///
    /// The chain is measured first so the buffer is allocated once and filled
    /// back to front.
    pub(crate) fn reconstruct(arena: &SearchArena, terminal: usize, reached: bool) -> Self {
        let mut n = 1;
        let mut idx = terminal;
        while arena.node(idx).predecessor != NO_PREDECESSOR {
            idx = arena.node(idx).predecessor;
            n += 1;
        }

        let mut points = vec![Point::ZERO; n];
        let mut idx = terminal;
        for slot in points.iter_mut().rev() {
            let node = arena.node(idx);
            *slot = node.pos;
            idx = node.predecessor;
        }

        Self {
            points,
            cost: arena.node(terminal).g,
            reached,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Accumulated step cost from the start to the last point.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Whether the path ends at the requested goal.
    #[inline]
    pub fn reached(&self) -> bool {
        self.reached
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Whether every consecutive pair of points is 8-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.points.windows(2).all(|w| chebyshev(w[0], w[1]) == 1)
    }
}
