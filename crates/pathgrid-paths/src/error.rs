//! The error type shared by map construction and path queries.

use pathgrid_core::Point;
use std::fmt;

/// Errors reported by [`GridMap`](crate::GridMap) construction and queries.
///
/// Running out of search budget is not an error: the search then returns the
/// best node it knows about (see [`Path::reached`](crate::Path::reached)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A configuration field is malformed. Detected before any cell is set.
    Configuration {
        /// Field path, e.g. `"buildings[2].size"`.
        field: String,
        reason: &'static str,
    },
    /// A building or wall row does not fit inside the logical map.
    OutOfBounds {
        what: &'static str,
        x: i32,
        y: i32,
        size: i32,
    },
    /// An obstacle or wall was placed over an occupied grid cell.
    ConstructionConflict { x: i32, y: i32 },
    /// A queried cell or path endpoint lies outside the grid.
    PositionOutOfBounds { pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::OutOfBounds { what, x, y, size } => {
                write!(f, "{what} ({x},{y},{size}) is out of map")
            }
            Self::ConstructionConflict { x, y } => {
                write!(f, "grid cell ({x},{y}) is already occupied")
            }
            Self::PositionOutOfBounds { pos } => write!(f, "position {pos} is out of map"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = MapError::Configuration {
            field: "buildings[1].size".into(),
            reason: "must be positive",
        };
        assert_eq!(e.to_string(), "invalid buildings[1].size: must be positive");
        let e = MapError::OutOfBounds {
            what: "building",
            x: 4,
            y: 0,
            size: 2,
        };
        assert_eq!(e.to_string(), "building (4,0,2) is out of map");
        let e = MapError::PositionOutOfBounds {
            pos: Point::new(-1, 3),
        };
        assert_eq!(e.to_string(), "position (-1, 3) is out of map");
    }
}
