use std::path::PathBuf;

/// Reasons a move is refused. The game is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: isize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over; reset to play again")]
    GameLocked,
}

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
