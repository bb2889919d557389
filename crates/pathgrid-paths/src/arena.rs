//! Fixed-capacity scratch space for one bounded search.
//!
//! The arena holds a node table and an index array of the same length. The
//! index array is shared by both search sets: open nodes fill it from the
//! front, closed nodes from the back. Every node is in at most one set, so the
//! two regions can never meet.
//!
//! ```text
//!  set: [ open0 open1 .. | free .. | .. closed1 closed0 ]
//!         ^ grows ->                      <- grows ^
//! ```

use pathgrid_core::Point;

/// Predecessor value of the start node.
pub const NO_PREDECESSOR: usize = usize::MAX;

/// One discovered cell and its search bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// Index of the node we came from, or [`NO_PREDECESSOR`].
    pub predecessor: usize,
    /// Accumulated cost from the start, saturating at `i32::MAX`.
    pub g: i32,
    /// `g` plus the estimate to the goal.
    pub f: i32,
}

/// Node storage for a single search, bounded by its capacity.
#[derive(Debug, Clone, Default)]
pub struct SearchArena {
    nodes: Vec<SearchNode>,
    set: Vec<usize>,
    open: usize,
    closed: usize,
}

impl SearchArena {
    /// Create an arena that can hold `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            set: vec![0; capacity],
            open: 0,
            closed: 0,
        }
    }

    /// Forget the previous search and set a new capacity.
    ///
    /// Memory from earlier, larger searches is kept, but no more than
    /// `capacity` slots are used afterwards.
    pub fn reset(&mut self, capacity: usize) {
        self.nodes.clear();
        self.nodes.reserve_exact(capacity);
        self.set.clear();
        self.set.resize(capacity, 0);
        self.open = 0;
        self.closed = 0;
    }

    /// Maximum number of nodes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.set.len()
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether no further node can be created.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity()
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }

    /// Node indices currently in the open set.
    #[inline]
    pub fn open_set(&self) -> &[usize] {
        &self.set[..self.open]
    }

    /// Node indices in the closed set, most recently closed first.
    #[inline]
    pub fn closed_set(&self) -> &[usize] {
        &self.set[self.capacity() - self.closed..]
    }

    /// Create a node and put it in the open set.
    ///
    /// Returns `None` when the arena is full; nothing is changed then.
    pub fn push_open(&mut self, pos: Point, predecessor: usize, g: i32, f: i32) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let idx = self.nodes.len();
        self.nodes.push(SearchNode {
            pos,
            predecessor,
            g,
            f,
        });
        self.set[self.open] = idx;
        self.open += 1;
        self.check();
        Some(idx)
    }

    /// Take the open node with the lowest `f` out of the open set.
    ///
    /// Ties go to the node that sits earliest in the open set.
    pub fn pop_lowest(&mut self) -> Option<usize> {
        let (slot, idx) = self.lowest(self.open_set())?;
        self.open -= 1;
        if slot != self.open {
            self.set[slot] = self.set[self.open];
        }
        Some(idx)
    }

    /// Move an extracted node into the closed set.
    pub fn close(&mut self, idx: usize) {
        let slot = self.capacity() - 1 - self.closed;
        self.set[slot] = idx;
        self.closed += 1;
        self.check();
    }

    pub fn is_closed(&self, p: Point) -> bool {
        self.closed_set().iter().any(|&i| self.nodes[i].pos == p)
    }

    /// Index of the open node at `p`.
    pub fn find_open(&self, p: Point) -> Option<usize> {
        self.open_set().iter().copied().find(|&i| self.nodes[i].pos == p)
    }

    /// Open node with the lowest `f`, left in place.
    pub fn nearest_open(&self) -> Option<usize> {
        self.lowest(self.open_set()).map(|(_, idx)| idx)
    }

    /// Closed node with the lowest `f`.
    pub fn nearest_closed(&self) -> Option<usize> {
        self.lowest(self.closed_set()).map(|(_, idx)| idx)
    }

    /// (position in `slots`, node index) of the first node with minimal `f`.
    fn lowest(&self, slots: &[usize]) -> Option<(usize, usize)> {
        let (&first, rest) = slots.split_first()?;
        let mut best = (0, first);
        let mut f = self.nodes[first].f;
        for (i, &idx) in rest.iter().enumerate() {
            if self.nodes[idx].f < f {
                f = self.nodes[idx].f;
                best = (i + 1, idx);
            }
        }
        Some(best)
    }

    #[inline]
    fn check(&self) {
        debug_assert!(self.open + self.closed <= self.nodes.len());
        debug_assert!(self.nodes.len() <= self.capacity());
    }
}
