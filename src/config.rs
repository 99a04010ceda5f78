use std::path::Path;

use crate::ai::{Difficulty, EngineConfig, PlayerKind};
use crate::error::ConfigError;
use crate::game::{Board, COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub board: BoardConfig,
    pub session: SessionConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            columns: COLS,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::with_size(self.rows, self.columns)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Who plays each colour, and for how many games.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub games: usize,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// Draw the starting colour at random for every game; otherwise Black
    /// always starts.
    pub random_starter: bool,
    /// Seed for computer players and the starter draw.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            games: 1,
            black: PlayerKind::Computer(Difficulty::Max),
            white: PlayerKind::Human,
            random_starter: true,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < 4 {
            return Err(ConfigError::Validation("board.rows must be >= 4".into()));
        }
        if self.board.columns < 4 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 4".into(),
            ));
        }
        if self.engine.max_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.max_depth must be >= 1".into(),
            ));
        }
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
