use std::{env, str::FromStr};

use thiserror::Error;

use crate::{
    constants::{CANVAS_SIZE, CELL_SIZE, PLAYER_STEP, WALL_WIDTH},
    maze::Layout,
};

pub const CANVAS_SIZE_KEY: &str = "MAZE_CANVAS_SIZE";
pub const CELL_SIZE_KEY: &str = "MAZE_CELL_SIZE";
pub const PLAYER_STEP_KEY: &str = "MAZE_PLAYER_STEP";
pub const SEED_KEY: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key} should be a number, got {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("{key} should be positive, got {value}")]
    NotPositive { key: &'static str, value: f32 },
    #[error("a {cell_size} pixel cell does not fit on a {canvas_size} pixel canvas")]
    CellTooLarge { cell_size: f32, canvas_size: f32 },
    #[error("a {cell_size} pixel cell leaves no room for the player between its walls")]
    CellTooSmall { cell_size: f32 },
    #[error("a step of {step} pixels does not divide the {cell_size} pixel cell")]
    UnevenStep { step: f32, cell_size: f32 },
    #[error("a step of {step} pixels can stop the player on a wall line")]
    StepHitsWall { step: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub canvas_size: f32,  // Square, in pixels.
    pub cell_size: f32,    // In pixels.
    pub player_step: f32,  // Pixels per key press.
    pub seed: Option<u64>, // Fixed maze when set, otherwise a fresh one per run.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            cell_size: CELL_SIZE,
            player_step: PLAYER_STEP,
            seed: None,
        }
    }
}

impl Config {
    /// Reads overrides from the environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            canvas_size: parse(&lookup, CANVAS_SIZE_KEY)?.unwrap_or(defaults.canvas_size),
            cell_size: parse(&lookup, CELL_SIZE_KEY)?.unwrap_or(defaults.cell_size),
            player_step: parse(&lookup, PLAYER_STEP_KEY)?.unwrap_or(defaults.player_step),
            seed: parse(&lookup, SEED_KEY)?.or(defaults.seed),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            (CANVAS_SIZE_KEY, self.canvas_size),
            (CELL_SIZE_KEY, self.cell_size),
            (PLAYER_STEP_KEY, self.player_step),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { key, value });
            }
        }

        if self.cell_size > self.canvas_size {
            return Err(ConfigError::CellTooLarge {
                cell_size: self.cell_size,
                canvas_size: self.canvas_size,
            });
        }

        if self.cell_size <= 2.0 * WALL_WIDTH {
            return Err(ConfigError::CellTooSmall {
                cell_size: self.cell_size,
            });
        }

        // Otherwise the player never lines up with the next cell and cannot turn.
        if self.cell_size % self.player_step != 0.0 {
            return Err(ConfigError::UnevenStep {
                step: self.player_step,
                cell_size: self.cell_size,
            });
        }

        // The player starts half a wall width off the grid lines and must never land on one.
        if (WALL_WIDTH / 2.0) % self.player_step == 0.0 {
            return Err(ConfigError::StepHitsWall {
                step: self.player_step,
            });
        }

        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::from_canvas(self.canvas_size, self.cell_size)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value.parse().map(Some).map_err(|_| ConfigError::Parse {
                key,
                value: raw.clone(),
            })
        }
    }
}
