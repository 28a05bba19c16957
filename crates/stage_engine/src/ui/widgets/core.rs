//! Core UI widget primitives
//!
//! Shared types used by all widgets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compass alignment of a widget or text relative to its anchor point
///
/// Written in dictionaries as `"nw"`, `"n"`, `"ne"`, `"w"`, `"center"`,
/// `"e"`, `"sw"`, `"s"`, `"se"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Align {
    /// Anchor is the top-left corner
    TopLeft,
    /// Anchor is the top edge midpoint
    TopCenter,
    /// Anchor is the top-right corner
    TopRight,
    /// Anchor is the left edge midpoint
    MiddleLeft,
    /// Anchor is the center
    #[default]
    Center,
    /// Anchor is the right edge midpoint
    MiddleRight,
    /// Anchor is the bottom-left corner
    BottomLeft,
    /// Anchor is the bottom edge midpoint
    BottomCenter,
    /// Anchor is the bottom-right corner
    BottomRight,
}

impl Align {
    /// Get the normalized anchor position (0.0 to 1.0)
    pub const fn to_normalized(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleLeft => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }

    /// Dictionary spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "nw",
            Self::TopCenter => "n",
            Self::TopRight => "ne",
            Self::MiddleLeft => "w",
            Self::Center => "center",
            Self::MiddleRight => "e",
            Self::BottomLeft => "sw",
            Self::BottomCenter => "s",
            Self::BottomRight => "se",
        }
    }
}

/// Unrecognized alignment string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment '{0}'")]
pub struct ParseAlignError(pub String);

impl FromStr for Align {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nw" | "topleft" => Ok(Self::TopLeft),
            "n" | "top" => Ok(Self::TopCenter),
            "ne" | "topright" => Ok(Self::TopRight),
            "w" | "left" => Ok(Self::MiddleLeft),
            "c" | "center" | "centre" => Ok(Self::Center),
            "e" | "right" => Ok(Self::MiddleRight),
            "sw" | "bottomleft" => Ok(Self::BottomLeft),
            "s" | "bottom" => Ok(Self::BottomCenter),
            "se" | "bottomright" => Ok(Self::BottomRight),
            _ => Err(ParseAlignError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Align {
    type Error = ParseAlignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Align> for String {
    fn from(value: Align) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer interaction state of a clickable widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Normal resting state
    #[default]
    Normal,
    /// Mouse is hovering over the widget
    Hovered,
    /// Left button is held over the widget
    Pressed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compass_and_aliases() {
        assert_eq!("nw".parse::<Align>().unwrap(), Align::TopLeft);
        assert_eq!("center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("C".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("se".parse::<Align>().unwrap(), Align::BottomRight);
        assert!("diagonal".parse::<Align>().is_err());
    }

    #[test]
    fn test_normalized_anchor() {
        assert_eq!(Align::TopLeft.to_normalized(), (0.0, 0.0));
        assert_eq!(Align::Center.to_normalized(), (0.5, 0.5));
        assert_eq!(Align::BottomCenter.to_normalized(), (0.5, 1.0));
    }

    #[test]
    fn test_display_matches_dictionary_spelling() {
        for align in [Align::TopLeft, Align::Center, Align::MiddleRight] {
            assert_eq!(align.to_string().parse::<Align>().unwrap(), align);
        }
    }
}
