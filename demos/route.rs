//! Plan one route and print it as ASCII.
//!
//! Usage:
//!   cargo run --bin route -- --map city.json 1 1 20 12
//!   cargo run --bin route -- --seed 7 --budget 200
//!
//! Without `--map` a random city is generated. Coordinates are grid cells
//! (double resolution, border included).

use clap::Parser;
use pathgrid_core::Point;
use pathgrid_demos::{CITY_HEIGHT, CITY_WIDTH, load_config, random_city, render};
use pathgrid_paths::{DEFAULT_BUDGET, MapConfig};
use rand::SeedableRng;

/// Bounded A* route through a city map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON map file; a random city is generated when absent
    #[arg(short, long)]
    map: Option<String>,

    /// Maximum number of search nodes
    #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
    budget: usize,

    /// Seed for the random city
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Start and end cells: SX SY EX EY (default: opposite corners)
    #[arg(num_args = 4, value_names = ["SX", "SY", "EX", "EY"], allow_negative_numbers = true)]
    coords: Vec<i32>,
}

impl Args {
    fn endpoints(&self) -> Option<(Point, Point)> {
        match self.coords[..] {
            [sx, sy, ex, ey] => Some((Point::new(sx, sy), Point::new(ex, ey))),
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg: MapConfig = match &args.map {
        Some(file) => load_config(file)?,
        None => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            random_city(&mut rng, CITY_WIDTH, CITY_HEIGHT)
        }
    };
    let map = cfg.build()?;

    let (from, to) = args.endpoints().unwrap_or_else(|| {
        let b = map.bounds();
        (Point::new(1, 1), Point::new(b.max.x - 2, b.max.y - 2))
    });

    let path = map.find_path(from, to, args.budget)?;
    print!("{}", render(&map, &path));
    println!(
        "{} -> {}: {} cells, cost {}, {}",
        path.start(),
        path.end(),
        path.len(),
        path.cost(),
        if path.reached() {
            "goal reached"
        } else {
            "budget or map exhausted, stopped at the closest node"
        }
    );
    Ok(())
}
