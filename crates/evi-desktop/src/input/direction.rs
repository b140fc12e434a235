//! Resize handle directions

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// One of the eight resize handles around a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    /// All eight directions
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    /// Combine edge flags into a direction; north wins over south and west over east
    pub fn from_edges(north: bool, south: bool, east: bool, west: bool) -> Option<Self> {
        let vertical = if north {
            Some(true)
        } else if south {
            Some(false)
        } else {
            None
        };
        let horizontal = if west {
            Some(true)
        } else if east {
            Some(false)
        } else {
            None
        };

        match (vertical, horizontal) {
            (Some(true), Some(true)) => Some(ResizeDirection::NW),
            (Some(true), Some(false)) => Some(ResizeDirection::NE),
            (Some(false), Some(true)) => Some(ResizeDirection::SW),
            (Some(false), Some(false)) => Some(ResizeDirection::SE),
            (Some(true), None) => Some(ResizeDirection::N),
            (Some(false), None) => Some(ResizeDirection::S),
            (None, Some(true)) => Some(ResizeDirection::W),
            (None, Some(false)) => Some(ResizeDirection::E),
            (None, None) => None,
        }
    }

    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// Handle name as used by the page ("n", "se", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownResizeDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_handles() {
        for dir in ResizeDirection::ALL {
            assert_eq!(dir.as_str().parse::<ResizeDirection>(), Ok(dir));
        }
        assert_eq!(
            "up".parse::<ResizeDirection>(),
            Err(DesktopError::UnknownResizeDirection("up".to_string()))
        );
    }

    #[test]
    fn test_axis_components() {
        assert!(ResizeDirection::NW.has_north() && ResizeDirection::NW.has_west());
        assert!(!ResizeDirection::NW.has_south() && !ResizeDirection::NW.has_east());
        assert!(ResizeDirection::E.has_east());
        assert!(!ResizeDirection::E.has_north() && !ResizeDirection::E.has_south());
    }

    #[test]
    fn test_from_edges() {
        assert_eq!(ResizeDirection::from_edges(true, false, true, false), Some(ResizeDirection::NE));
        assert_eq!(ResizeDirection::from_edges(false, true, false, false), Some(ResizeDirection::S));
        assert_eq!(ResizeDirection::from_edges(false, false, false, false), None);
    }
}
