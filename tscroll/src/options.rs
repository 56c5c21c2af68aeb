//! Scrollbar configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default content pixels scrolled per wheel unit.
pub const DEFAULT_SCROLL_RATIO: f64 = 24.0;

/// Which edge of the outer container the track is anchored to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionKey {
    Left,
    #[default]
    Right,
}

impl PositionKey {
    /// The inline style property that anchors the track.
    pub fn property(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// Error returned when parsing an unknown position key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scrollbar position {0:?}, expected \"left\" or \"right\"")]
pub struct ParsePositionError(pub String);

impl FromStr for PositionKey {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}

/// Per-instance options, fixed at attach time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Track anchor edge.
    pub position: PositionKey,
}

impl Options {
    pub fn left() -> Self {
        Self {
            position: PositionKey::Left,
        }
    }

    pub fn right() -> Self {
        Self {
            position: PositionKey::Right,
        }
    }
}

/// Controller-wide configuration shared by every instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Content pixels scrolled per unit of normalized wheel delta.
    pub scroll_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_ratio: DEFAULT_SCROLL_RATIO,
        }
    }
}
