use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::direction::{Direction, INITIAL_HEADING};
use crate::food::FoodLimits;
use crate::grid::{Cell, GridSpace};
use crate::snake::INITIAL_SNAKE_LENGTH;

const APP_DIR_NAME: &str = "timed-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 24;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Default number of terminal columns one cell spans.
pub const DEFAULT_CELL_SIZE: u16 = 2;

pub const DEFAULT_MIN_FOOD: usize = 3;
pub const DEFAULT_MAX_FOOD: usize = 7;
pub const DEFAULT_MAX_TOTAL_FOOD: usize = 20;

/// Movement tick interval in milliseconds.
pub const DEFAULT_MOVEMENT_INTERVAL_MS: u64 = 200;

/// Food spawn tick interval in milliseconds.
pub const DEFAULT_FOOD_INTERVAL_MS: u64 = 5000;

/// Head cell of a fresh snake.
pub const DEFAULT_START: Cell = Cell::new(4, 4);

/// Failures while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game constants.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub cell_size: u16,
    pub width: u16,
    pub height: u16,
    pub min_food: usize,
    pub max_food: usize,
    pub max_total_food: usize,
    pub movement_interval_ms: u64,
    pub food_interval_ms: u64,
    pub start: Cell,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            min_food: DEFAULT_MIN_FOOD,
            max_food: DEFAULT_MAX_FOOD,
            max_total_food: DEFAULT_MAX_TOTAL_FOOD,
            movement_interval_ms: DEFAULT_MOVEMENT_INTERVAL_MS,
            food_interval_ms: DEFAULT_FOOD_INTERVAL_MS,
            start: DEFAULT_START,
        }
    }
}

impl GameConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads configuration from `path`.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&raw)
    }

    /// Loads `explicit` when given, otherwise the per-user config file if it
    /// exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks the cross-field constraints the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "playfield must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }

        if self.cell_size == 0 {
            return Err(invalid("cell_size must be positive".to_owned()));
        }

        if self.movement_interval_ms == 0 || self.food_interval_ms == 0 {
            return Err(invalid("tick intervals must be positive".to_owned()));
        }

        if self.min_food > self.max_food {
            return Err(invalid(format!(
                "min_food ({}) exceeds max_food ({})",
                self.min_food, self.max_food
            )));
        }

        if self.max_food > self.max_total_food {
            return Err(invalid(format!(
                "max_food ({}) exceeds max_total_food ({})",
                self.max_food, self.max_total_food
            )));
        }

        let grid = self.grid();
        let mut segment = self.start;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            if !grid.in_bounds(segment) {
                return Err(invalid(format!(
                    "starting snake at ({}, {}) does not fit the {}x{} playfield",
                    self.start.col, self.start.row, self.width, self.height
                )));
            }
            segment = segment.step(initial_tail_direction());
        }

        // Rejection sampling needs free cells left over.
        if self.max_total_food + INITIAL_SNAKE_LENGTH >= grid.capacity() {
            return Err(invalid(format!(
                "max_total_food ({}) leaves no free cells on a {}-cell playfield",
                self.max_total_food,
                grid.capacity()
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> GridSpace {
        GridSpace::new(self.width.max(1), self.height.max(1), self.cell_size)
    }

    #[must_use]
    pub fn food_limits(&self) -> FoodLimits {
        FoodLimits {
            min_initial: self.min_food,
            max_initial: self.max_food,
            max_total: self.max_total_food,
        }
    }

    #[must_use]
    pub fn movement_interval(&self) -> Duration {
        Duration::from_millis(self.movement_interval_ms)
    }

    #[must_use]
    pub fn food_interval(&self) -> Duration {
        Duration::from_millis(self.food_interval_ms)
    }
}

/// Returns the platform-correct per-user config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

fn initial_tail_direction() -> Direction {
    INITIAL_HEADING.opposite()
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::grid::Cell;

    use super::{ConfigError, GameConfig};

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.grid().capacity(), 576);
        assert_eq!(config.movement_interval().as_millis(), 200);
        assert_eq!(config.food_interval().as_millis(), 5000);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "width": 30, "max_food": 9 }"#)
            .expect("partial config should parse");

        assert_eq!(config.width, 30);
        assert_eq!(config.max_food, 9);
        assert_eq!(config.height, 24);
        assert_eq!(config.start, Cell::new(4, 4));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = GameConfig::from_json_str(r#"{ "speed": 3 }"#);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn inverted_food_range_is_invalid() {
        let config = GameConfig {
            min_food: 8,
            max_food: 7,
            ..GameConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn batch_above_cap_is_invalid() {
        let config = GameConfig {
            max_food: 21,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn start_too_close_to_left_wall_is_invalid() {
        let config = GameConfig {
            start: Cell::new(1, 4),
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn food_cap_must_leave_free_cells() {
        let config = GameConfig {
            width: 5,
            height: 5,
            start: Cell::new(2, 2),
            min_food: 1,
            max_food: 2,
            max_total_food: 22,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
        assert!(
            GameConfig {
                max_total_food: 21,
                ..config
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn zero_interval_is_invalid() {
        let config = GameConfig {
            food_interval_ms: 0,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn config_file_round_trip() {
        let path = unique_test_path("round_trip");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "height": 16, "food_interval_ms": 3000 }"#)
            .expect("test file write should succeed");

        let loaded = GameConfig::load(Some(&path)).expect("load should succeed");

        assert_eq!(loaded.height, 16);
        assert_eq!(loaded.food_interval_ms, 3000);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            GameConfig::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("timed-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
