//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Board, BoardError, DEFAULT_ORDER, Point, Round, TurnDecider};
use tracing::{debug, info, instrument};

/// Window geometry and rules for one table.
///
/// Every field is optional in the file; missing fields take the classic
/// 800 × 600 layout with a three-by-three grid and crosses moving first.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in board units.
    #[serde(default = "default_window_width")]
    window_width: f64,

    /// Window height in board units.
    #[serde(default = "default_window_height")]
    window_height: f64,

    /// Bottom-left corner of the window in board space.
    #[serde(default)]
    origin: Point,

    /// Cells per row and per column.
    #[serde(default = "default_grid_order")]
    grid_order: usize,

    /// Gap between the window edge and the grid.
    #[serde(default = "default_cell_margin")]
    cell_margin: f64,

    /// Gap between a cell edge and the mark drawn inside it.
    #[serde(default = "default_shape_margin")]
    shape_margin: f64,

    /// Mark that moves first: `"cross"` or `"circle"`.
    #[serde(default = "default_first_mark")]
    first_mark: String,
}

fn default_window_width() -> f64 {
    800.0
}

fn default_window_height() -> f64 {
    600.0
}

fn default_grid_order() -> usize {
    DEFAULT_ORDER
}

fn default_cell_margin() -> f64 {
    45.0
}

fn default_shape_margin() -> f64 {
    25.0
}

fn default_first_mark() -> String {
    "cross".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            origin: Point::default(),
            grid_order: default_grid_order(),
            cell_margin: default_cell_margin(),
            shape_margin: default_shape_margin(),
            first_mark: default_first_mark(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            grid_order = config.grid_order,
            first_mark = %config.first_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds the board described by this configuration.
    #[instrument(skip(self))]
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::build(
            self.origin,
            self.window_width,
            self.window_height,
            self.grid_order,
            self.cell_margin,
        )?)
    }

    /// Creates the turn decider for the configured first mark.
    #[instrument(skip(self))]
    pub fn turn_decider(&self) -> Result<TurnDecider, ConfigError> {
        Ok(TurnDecider::from_name(&self.first_mark)?)
    }

    /// Builds a fresh round: board plus turn decider.
    ///
    /// Both parts are validated here, so a bad first mark fails before any
    /// click is handled.
    #[instrument(skip(self))]
    pub fn new_round(&self) -> Result<Round, ConfigError> {
        Ok(Round::new(self.build_board()?, self.turn_decider()?))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for ConfigError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(format!("Invalid board configuration: {}", err))
    }
}
