//! Core types for play-order control

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the toggle cycle: Off → All → One → Off
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    /// Config string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        }
    }
}

/// Unrecognized repeat mode string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown repeat mode '{0}' (expected off, all or one)")]
pub struct ParseRepeatModeError(String);

impl FromStr for RepeatMode {
    type Err = ParseRepeatModeError;

    /// Parse from a config or CLI string, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(RepeatMode::Off),
            "all" => Ok(RepeatMode::All),
            "one" => Ok(RepeatMode::One),
            _ => Err(ParseRepeatModeError(s.to_string())),
        }
    }
}

/// Shuffle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Canonical playlist order
    #[default]
    Off,

    /// Uniform random permutation
    On,
}

impl ShuffleMode {
    /// Next mode in the toggle cycle: Off → On → Off
    pub fn next(self) -> Self {
        match self {
            ShuffleMode::Off => ShuffleMode::On,
            ShuffleMode::On => ShuffleMode::Off,
        }
    }

    /// Whether the queue should be permuted
    pub fn is_on(self) -> bool {
        matches!(self, ShuffleMode::On)
    }
}

impl From<bool> for ShuffleMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            ShuffleMode::On
        } else {
            ShuffleMode::Off
        }
    }
}

/// Configuration for the play-order controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial repeat mode (default: Off)
    #[serde(default)]
    pub repeat: RepeatMode,

    /// Initial shuffle mode (default: Off)
    #[serde(default)]
    pub shuffle: ShuffleMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.repeat, RepeatMode::Off);
        assert_eq!(config.shuffle, ShuffleMode::Off);
    }

    #[test]
    fn repeat_cycle_order() {
        assert_eq!(RepeatMode::Off.next(), RepeatMode::All);
        assert_eq!(RepeatMode::All.next(), RepeatMode::One);
        assert_eq!(RepeatMode::One.next(), RepeatMode::Off);
    }

    #[test]
    fn repeat_string_conversion() {
        for mode in [RepeatMode::Off, RepeatMode::All, RepeatMode::One] {
            assert_eq!(mode.as_str().parse::<RepeatMode>(), Ok(mode));
        }
        assert_eq!("none".parse::<RepeatMode>(), Ok(RepeatMode::Off));
        assert_eq!("One".parse::<RepeatMode>(), Ok(RepeatMode::One));

        let err = "twice".parse::<RepeatMode>().unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn shuffle_cycle_order() {
        assert_eq!(ShuffleMode::Off.next(), ShuffleMode::On);
        assert_eq!(ShuffleMode::On.next(), ShuffleMode::Off);
        assert!(ShuffleMode::from(true).is_on());
    }

    #[test]
    fn config_deserializes_lowercase_modes() {
        let config: PlaybackConfig =
            serde_json::from_str(r#"{"repeat":"one","shuffle":"on"}"#).unwrap();
        assert_eq!(config.repeat, RepeatMode::One);
        assert_eq!(config.shuffle, ShuffleMode::On);
    }
}
