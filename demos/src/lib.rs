//! Shared helpers for the pathgrid demos: a seeded city generator, JSON map
//! loading and an ASCII renderer.

use std::error::Error;

use pathgrid_core::Point;
use pathgrid_paths::{Building, GridMap, IMPASSABLE, MapConfig, Path};
use rand::{Rng, RngExt};

/// Logical size of generated cities.
pub const CITY_WIDTH: i32 = 24;
pub const CITY_HEIGHT: i32 = 12;

/// Generate a city of `width` × `height` logical cells.
///
/// Buildings are dropped at random and kept only if the map still builds;
/// fences (short wall runs) then go on the remaining free cells.
pub fn random_city(rng: &mut impl Rng, width: i32, height: i32) -> MapConfig {
    let mut cfg = MapConfig::new(width, height);
    let attempts = (width * height / 6).max(1);
    for _ in 0..attempts {
        let size = rng.random_range(1..4);
        let b = Building::new(
            rng.random_range(0..width),
            rng.random_range(0..height),
            size,
        );
        let mut candidate = cfg.clone();
        candidate.buildings.push(b);
        if candidate.build().is_ok() {
            cfg = candidate;
        }
    }

    let Ok(base) = cfg.build() else {
        return cfg;
    };
    let mut rows = vec![String::new(); height as usize];
    for (y, row) in rows.iter_mut().enumerate() {
        for x in 0..width {
            let seam = pathgrid_paths::logical_to_grid(Point::new(x, y as i32));
            let free = base.get(seam) == Some(0);
            let fence = free && rng.random_range(0..8) == 0;
            row.push(if fence {
                (b'A' + rng.random_range(0..6u8)) as char
            } else {
                '.'
            });
        }
    }
    let fenced = MapConfig {
        walls: rows,
        ..cfg.clone()
    };
    // keep the unfenced city if the fences do not fit
    if fenced.build().is_ok() { fenced } else { cfg }
}

/// Read a [`MapConfig`] from a JSON file.
pub fn load_config(path: &str) -> Result<MapConfig, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    let cfg: MapConfig = serde_json::from_str(&text)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Character used for a grid cell with cost `v`.
pub fn cell_char(v: u8) -> char {
    match v {
        0 => '.',
        IMPASSABLE => '#',
        w => (b'a' + (w - 1).min(25)) as char,
    }
}

/// Draw the map with the path on top: `S` start, `G` reached goal, `E` end
/// of a path that fell short, `*` everything in between.
pub fn render(map: &GridMap, path: &Path) -> String {
    let mut out = String::with_capacity(((map.width() + 1) * map.height()) as usize);
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let ch = if p == path.start() {
                'S'
            } else if p == path.end() {
                if path.reached() { 'G' } else { 'E' }
            } else if path.points().contains(&p) {
                '*'
            } else {
                map.get(p).map_or(' ', cell_char)
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
