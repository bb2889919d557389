//! Budget-bounded A* search.
//!
//! The search never allocates beyond its [`SearchArena`]. When the arena
//! fills up, nodes already discovered are still expanded, but no new ones are
//! added; once the open set drains, the closed node with the lowest `f` stands
//! in for the goal. A query therefore always yields a path.

use pathgrid_core::{Point, Range};

use crate::arena::{NO_PREDECESSOR, SearchArena};
use crate::error::MapError;
use crate::neighbors::Direction;
use crate::path::Path;
use crate::traits::AstarPather;

/// Node budget used when the caller has no better idea.
pub const DEFAULT_BUDGET: usize = 1024;

/// Runs bounded searches over a grid rectangle, reusing one arena.
///
/// The arena is reset at the start of every query and only ever holds as
/// many nodes as that query's budget.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    rng: Range,
    arena: SearchArena,
}

impl PathFinder {
    /// Create a finder for searches inside `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            arena: SearchArena::default(),
        }
    }

    /// Replace the searched rectangle.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The arena as the last query left it.
    #[inline]
    pub fn arena(&self) -> &SearchArena {
        &self.arena
    }

    /// Find a path from `from` to `to` creating at most `budget` nodes.
    ///
    /// Fails only if an endpoint lies outside the range. If the goal is not
    /// reached, the path leads to the explored node with the lowest `f`
    /// instead; a zero budget yields just `[from]`. A budget larger than the
    /// range is clamped to its cell count, since no cell is visited twice.
    pub fn path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        budget: usize,
    ) -> Result<Path, MapError> {
        for pos in [from, to] {
            if !self.rng.contains(pos) {
                return Err(MapError::PositionOutOfBounds { pos });
            }
        }

        self.arena.reset(budget.min(self.rng.len()));
        let path = match self.search(pather, from, to) {
            Some((terminal, reached)) => Path::reconstruct(&self.arena, terminal, reached),
            None => Path::single(from, from == to),
        };
        log::trace!(
            "path {from} -> {to}: {} cells, cost {}, reached: {}, {} of {} nodes",
            path.len(),
            path.cost(),
            path.reached(),
            self.arena.len(),
            self.arena.capacity()
        );
        Ok(path)
    }

    /// Returns the terminal node and whether it is the goal, or `None` if
    /// not even the start fits in the arena.
    fn search<P: AstarPather>(&mut self, pather: &P, from: Point, to: Point) -> Option<(usize, bool)> {
        let rng = self.rng;
        let arena = &mut self.arena;

        arena.push_open(from, NO_PREDECESSOR, 0, pather.estimate(from, to))?;

        let mut exhausted = false;
        while let Some(current) = arena.pop_lowest() {
            let node = *arena.node(current);
            if node.pos == to {
                return Some((current, true));
            }
            arena.close(current);

            for dir in Direction::ALL {
                let np = node.pos + dir.offset();
                if !rng.contains(np) || !pather.passable(np) || arena.is_closed(np) {
                    continue;
                }
                // Costs saturate at i32::MAX on huge weighted maps.
                let tentative_g = node.g.saturating_add(pather.cost(node.pos, np));
                let tentative_f = tentative_g.saturating_add(pather.estimate(np, to));
                if let Some(ni) = arena.find_open(np) {
                    let n = arena.node_mut(ni);
                    if tentative_g < n.g {
                        n.predecessor = current;
                        n.g = tentative_g;
                        n.f = tentative_f;
                    }
                } else if arena
                    .push_open(np, current, tentative_g, tentative_f)
                    .is_none()
                {
                    if !exhausted {
                        log::debug!(
                            "search budget of {} nodes exhausted while expanding {}",
                            arena.capacity(),
                            node.pos
                        );
                        exhausted = true;
                    }
                    break;
                }
            }
        }

        let terminal = arena.nearest_open().or_else(|| arena.nearest_closed())?;
        log::debug!(
            "goal {to} not reached from {from}; stopping at {}",
            arena.node(terminal).pos
        );
        Some((terminal, false))
    }
}
