use std::path::PathBuf;

/// Errors raised by bounds-checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("row {row} out of range (board has {rows} rows)")]
    InvalidRow { row: usize, rows: usize },

    #[error("board dimensions must be non-zero (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// Errors that can occur when applying a move to a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("invalid column: {0}")]
    InvalidColumn(#[from] BoardError),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur while an agent chooses a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal column to play: the board is full")]
    NoLegalMove,
}

/// A player selection string that names no known player kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player kind '{0}' (expected human, random, easy, medium or max)")]
pub struct ParsePlayerError(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
