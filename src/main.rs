mod config;

use anyhow::Result;
use tephra_vec2::{GridVec, WorldVec};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

use crate::config::SimConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cfg = config::load_config()?;

    info!("Tephra grain drift started.");
    info!("  Board:        {}", cfg.board);
    info!("  Gravity:      {:.2}", cfg.gravity);
    info!("  Air friction: {:.2}", cfg.air_friction);
    info!("  Spawn cell:   {}", cfg.spawn_cell);
    info!("  Initial vel:  {}", cfg.initial_vel);

    run(&cfg)
}

/// Integrates a single grain until it leaves the board or steps run out.
fn run(cfg: &SimConfig) -> Result<()> {
    let gravity = WorldVec::new(cfg.gravity, 0.0);
    let mut cell = cfg.spawn_cell;
    let mut vel = cfg.initial_vel;

    for step in 0..cfg.num_steps {
        vel = vel + gravity;
        vel = WorldVec::new(vel.y, vel.x * cfg.air_friction);

        let target = cell + vel.round();
        if !in_bounds(target, cfg.board) {
            warn!(
                "Step {:>3}: grain left the board at {}, stopping.",
                step + 1,
                target
            );
            vel = WorldVec::default();
            break;
        }

        cell = target;
        info!(
            "Step {:>3}: cell {} speed {:.2} heading {}",
            step + 1,
            cell,
            vel.length(),
            vel.normalized()
        );
    }

    info!("Grain settled. Final cell: {} final vel: {}", cell, vel);
    Ok(())
}

fn in_bounds(cell: GridVec, board: GridVec) -> bool {
    0 <= cell.y && cell.y < board.y && 0 <= cell.x && cell.x < board.x
}
