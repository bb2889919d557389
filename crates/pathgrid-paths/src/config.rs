//! Map description handed to [`GridMap`] construction.

use crate::error::MapError;
use crate::map::GridMap;

/// Largest accepted logical width or height.
pub const MAX_LOGICAL_SIDE: i32 = 4096;

/// A square building in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Building {
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }
}

/// Everything needed to build a [`GridMap`].
///
/// `walls` holds one string per logical row; each character `A`..=`Z` puts a
/// wall of weight 1..=26 on the seam of that column. Other characters leave
/// the seam free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buildings: Vec<Building>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<String>,
}

impl MapConfig {
    /// An empty map of the given logical size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_building(mut self, b: Building) -> Self {
        self.buildings.push(b);
        self
    }

    pub fn with_wall_row(mut self, row: impl Into<String>) -> Self {
        self.walls.push(row.into());
        self
    }

    /// Check every numeric field without building anything.
    ///
    /// Placement problems (a building hanging off the map, overlaps) are left
    /// to construction; this only rejects values that make no sense at all.
    pub fn validate(&self) -> Result<(), MapError> {
        validate_parts(self.width, self.height, &self.buildings)
    }

    /// Validate, then build the map.
    pub fn build(&self) -> Result<GridMap, MapError> {
        GridMap::new(self.width, self.height, &self.buildings, &self.walls)
    }
}

pub(crate) fn validate_parts(
    width: i32,
    height: i32,
    buildings: &[Building],
) -> Result<(), MapError> {
    check_side("width", width)?;
    check_side("height", height)?;
    for (i, b) in buildings.iter().enumerate() {
        if b.size <= 0 {
            return Err(MapError::Configuration {
                field: format!("buildings[{i}].size"),
                reason: "must be positive",
            });
        }
        if b.size > MAX_LOGICAL_SIDE {
            return Err(MapError::Configuration {
                field: format!("buildings[{i}].size"),
                reason: "exceeds the maximum map side",
            });
        }
        // Keeps the doubled coordinates of any placement check in range.
        if b.x.unsigned_abs() > MAX_LOGICAL_SIDE as u32 * 2
            || b.y.unsigned_abs() > MAX_LOGICAL_SIDE as u32 * 2
        {
            return Err(MapError::Configuration {
                field: format!("buildings[{i}]"),
                reason: "coordinate magnitude too large",
            });
        }
    }
    Ok(())
}

fn check_side(field: &str, v: i32) -> Result<(), MapError> {
    if v <= 0 {
        return Err(MapError::Configuration {
            field: field.to_string(),
            reason: "must be positive",
        });
    }
    if v > MAX_LOGICAL_SIDE {
        return Err(MapError::Configuration {
            field: field.to_string(),
            reason: "exceeds the maximum map side",
        });
    }
    Ok(())
}
