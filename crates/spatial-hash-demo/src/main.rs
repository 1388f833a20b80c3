//! Example driver for the spatial hash grid.
//!
//! Builds a grid, registers a couple of objects, and logs what a few
//! neighborhood queries return.
//!
//! Environment:
//! - `GRID_CONFIG` - path to a JSON grid config, e.g.
//!   `{"bounds":{"x":[0,800],"y":[0,600]},"resolution":[10,10]}`.
//!   Defaults to an 800x600 world split into 10x10 cells.

use std::path::PathBuf;

use eyre::WrapErr;
use spatial_hash::{GridConfig, SpatialHashGrid};
use tracing::info;

fn load_config() -> eyre::Result<GridConfig> {
    let Some(path) = std::env::var_os("GRID_CONFIG").map(PathBuf::from) else {
        return Ok(GridConfig::default());
    };

    let text = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid grid config in {}", path.display()))
}

fn names(grid: &SpatialHashGrid, center: (f64, f64), extent: (f64, f64)) -> Vec<String> {
    let mut names: Vec<_> = grid
        .query_records(center, extent)
        .map(|record| record.name().to_owned())
        .collect();
    names.sort_unstable();
    names
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spatial_hash_demo=info".parse()?),
        )
        .init();

    let config = load_config()?;
    info!(?config, "Starting spatial hash demo");

    let mut grid = SpatialHashGrid::new(config)?;

    let client1 = grid.insert((100.0, 150.0), (30.0, 30.0), "Client1")?;
    let client2 = grid.insert((400.0, 300.0), (50.0, 50.0), "Client2")?;
    info!(%client1, %client2, buckets = grid.bucket_count(), "Registered clients");

    let window = ((120.0, 160.0), (100.0, 100.0));
    info!("Nearby {:?}: {:?}", window.0, names(&grid, window.0, window.1));

    grid.update(client2, (130.0, 170.0))?;
    info!("After moving Client2: {:?}", names(&grid, window.0, window.1));

    grid.remove(client1);
    info!("After removing Client1: {:?}", names(&grid, window.0, window.1));

    Ok(())
}
