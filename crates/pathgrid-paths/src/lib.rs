//! Budget-bounded pathfinding on a building-and-wall grid map.
//!
//! A map is described in *logical* cells: square [`Building`]s and rows of
//! weighted wall letters. [`GridMap`] turns that into a cost field at twice
//! the logical resolution plus an impassable border, so walls can sit on the
//! seams between logical cells.
//!
//! Queries run a bounded A* ([`PathFinder`]) that never creates more nodes
//! than its budget. If the goal is out of reach within that budget, the path
//! leads to the most promising node found instead of failing.
//!
//! ```
//! use pathgrid_core::Point;
//! use pathgrid_paths::{Building, DEFAULT_BUDGET, GridMap};
//!
//! let map = GridMap::new(4, 4, &[Building::new(1, 1, 2)], &["..C"]).unwrap();
//! let path = map.find_path(Point::new(1, 1), Point::new(8, 8), DEFAULT_BUDGET).unwrap();
//! assert!(path.reached());
//! assert_eq!(path.end(), Point::new(8, 8));
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | passability |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | the search heuristic |

mod arena;
mod astar;
mod config;
mod coords;
mod distance;
mod error;
mod map;
mod neighbors;
mod path;
mod traits;

pub use arena::{NO_PREDECESSOR, SearchArena, SearchNode};
pub use astar::{DEFAULT_BUDGET, PathFinder};
pub use config::{Building, MAX_LOGICAL_SIDE, MapConfig};
pub use coords::{grid_size, grid_to_logical, logical_rect, logical_to_grid};
pub use distance::{chebyshev, octile};
pub use error::MapError;
pub use map::{GridMap, IMPASSABLE, MAX_WALL_WEIGHT, wall_weight};
pub use neighbors::{DIAGONAL_COST, Direction, ORTHOGONAL_COST};
pub use path::Path;
pub use traits::{AstarPather, Pather, WeightedPather};
