use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// How each player's pieces are drawn.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_symbol: String,
    pub two_symbol: String,
    /// Any color name ratatui understands: "green", "lightblue", "#ff8800", ...
    pub one_color: String,
    pub two_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_symbol: Player::One.symbol().to_string(),
            two_symbol: Player::Two.symbol().to_string(),
            one_color: Player::One.color().to_string(),
            two_color: Player::Two.color().to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn symbol(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_symbol,
            Player::Two => &self.two_symbol,
        }
    }

    /// Parsed color for `player`. Falls back to white for unparseable names,
    /// which [`AppConfig::validate`] rejects up front.
    pub fn color(&self, player: Player) -> Color {
        let name = match player {
            Player::One => &self.one_color,
            Player::Two => &self.two_color,
        };
        Color::from_str(name).unwrap_or(Color::White)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing.
    pub poll_interval_ms: u64,
    /// Column the selector starts on after launch and after a reset.
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            start_column: COLS / 2,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Log destination. Nothing is logged when unset, since the terminal
    /// belongs to the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn parse_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ConfigError::Validation(format!("log.level '{}' is not a level", self.level)))
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, symbol) in [
            ("players.one_symbol", &self.players.one_symbol),
            ("players.two_symbol", &self.players.two_symbol),
        ] {
            if symbol.chars().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single character"
                )));
            }
        }
        if self.players.one_symbol == self.players.two_symbol {
            return Err(ConfigError::Validation(
                "players.one_symbol and players.two_symbol must differ".into(),
            ));
        }

        for (key, color) in [
            ("players.one_color", &self.players.one_color),
            ("players.two_color", &self.players.two_color),
        ] {
            if Color::from_str(color).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key} '{color}' is not a color"
                )));
            }
        }

        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }

        self.log.parse_level()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
