//! Session configuration.

use std::fmt;
#[cfg(feature = "serde")]
use std::{fs, io, path::Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::locator::{Orientation, PixelGrid};
use crate::board::{Board, Color, FenError};

/// Settings for a new game.
///
/// With the `serde` feature, missing YAML keys fall back to the defaults:
/// ```yaml
/// first_to_move: Black
/// square_size: 80.0
/// orientation: BlackBottom
/// start_fen: "6k1/5ppp/8/8/8/8/8/R6K"
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GameConfig {
    pub first_to_move: Color,
    /// Pixel size of one square
    pub square_size: f32,
    pub orientation: Orientation,
    /// Piece placement to start from; the standard position when absent
    pub start_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_to_move: Color::White,
            square_size: 64.0,
            orientation: Orientation::WhiteBottom,
            start_fen: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_size.is_finite() && self.square_size > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidSquareSize(self.square_size))
        }
    }

    /// The starting board: `start_fen` if set, otherwise the standard setup.
    pub fn board(&self) -> Result<Board, ConfigError> {
        match &self.start_fen {
            Some(fen) => Ok(Board::try_from_fen(fen)?),
            None => Ok(Board::new()),
        }
    }

    #[must_use]
    pub fn locator(&self) -> PixelGrid {
        PixelGrid::new(self.square_size, self.orientation)
    }

    #[cfg(feature = "serde")]
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

/// Errors while reading or applying a [`GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Square size is zero, negative or not a number
    InvalidSquareSize(f32),
    /// `start_fen` does not describe a playable board
    Fen(FenError),
    #[cfg(feature = "serde")]
    Io(io::Error),
    #[cfg(feature = "serde")]
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSquareSize(size) => write!(f, "Invalid square size: {}", size),
            ConfigError::Fen(err) => write!(f, "Invalid start position: {}", err),
            #[cfg(feature = "serde")]
            ConfigError::Io(err) => write!(f, "Cannot read config: {}", err),
            #[cfg(feature = "serde")]
            ConfigError::Yaml(err) => write!(f, "Cannot parse config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSquareSize(_) => None,
            ConfigError::Fen(err) => Some(err),
            #[cfg(feature = "serde")]
            ConfigError::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            ConfigError::Yaml(err) => Some(err),
        }
    }
}

impl From<FenError> for ConfigError {
    fn from(err: FenError) -> Self {
        ConfigError::Fen(err)
    }
}

#[cfg(feature = "serde")]
impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board().unwrap().to_fen(), Board::new().to_fen());
        assert_eq!(config.locator().square_size, 64.0);
    }

    #[test]
    fn bad_square_sizes_are_rejected() {
        for size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let config = GameConfig {
                square_size: size,
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSquareSize(_))
            ));
        }
    }

    #[test]
    fn bad_start_fen_is_reported() {
        let config = GameConfig {
            start_fen: Some("8/8/8/8/8/8/8/8".to_string()),
            ..GameConfig::default()
        };
        let err = config.board().unwrap_err();
        assert!(matches!(err, ConfigError::Fen(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn yaml_overrides_defaults() {
        let config = GameConfig::from_yaml(
            "first_to_move: Black\norientation: BlackBottom\nstart_fen: \"6k1/5ppp/8/8/8/8/8/R6K\"\n",
        )
        .unwrap();
        assert_eq!(config.first_to_move, Color::Black);
        assert_eq!(config.orientation, Orientation::BlackBottom);
        assert_eq!(config.square_size, 64.0);
        assert!(config.board().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn yaml_errors_surface() {
        assert!(matches!(
            GameConfig::from_yaml("square_size: -1.0"),
            Err(ConfigError::InvalidSquareSize(_))
        ));
        assert!(matches!(
            GameConfig::from_yaml("first_to_move: Green"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
