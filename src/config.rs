use config::{Config, ConfigError, File, FileFormat};
use tephra_vec2::{GridVec, WorldVec};
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Parameters for the grain drift simulation, read from the TOML config.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Board size as (rows, columns).
    pub board: GridVec,
    /// Downward acceleration added to the grain's velocity each step.
    pub gravity: f32,
    /// Per-step decay factor applied to horizontal velocity.
    pub air_friction: f32,
    /// Maximum number of simulation steps.
    pub num_steps: u32,
    /// Cell the grain starts in.
    pub spawn_cell: GridVec,
    /// Velocity the grain starts with.
    pub initial_vel: WorldVec,
}

pub fn load_config() -> Result<SimConfig, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build();

    let settings = match settings {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let config = SimConfig {
        board: GridVec::new(
            settings.get_int("board.height")? as i32,
            settings.get_int("board.width")? as i32,
        ),
        gravity: settings.get_float("sim.gravity")? as f32,
        air_friction: settings.get_float("sim.air_friction")? as f32,
        num_steps: settings.get_int("sim.num_steps")? as u32,
        spawn_cell: GridVec::new(
            settings.get_int("grain.spawn_y")? as i32,
            settings.get_int("grain.spawn_x")? as i32,
        ),
        initial_vel: WorldVec::new(
            settings.get_float("grain.vel_y")? as f32,
            settings.get_float("grain.vel_x")? as f32,
        ),
    };

    info!("Successfully loaded configuration: {:?}", config);
    Ok(config)
}
