// Basketball positions and the position groups roster quotas are written against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five listed basketball positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

/// Coarse grouping of positions. Every position belongs to exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    Guards,
    Forwards,
    Centers,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Parse a position string from the stats table.
    ///
    /// Hybrid listings such as `"PG-SG"` or `"SF-PF"` resolve to the first
    /// listed position. Returns `None` for anything unrecognized.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        // Hybrids fill one quota slot, not zero and not both.
        let primary = s.split('-').next()?.trim();
        match primary.to_uppercase().as_str() {
            "PG" => Some(Position::PointGuard),
            "SG" => Some(Position::ShootingGuard),
            "SF" => Some(Position::SmallForward),
            "PF" => Some(Position::PowerForward),
            "C" => Some(Position::Center),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::PointGuard | Position::ShootingGuard => PositionGroup::Guards,
            Position::SmallForward | Position::PowerForward => PositionGroup::Forwards,
            Position::Center => PositionGroup::Centers,
        }
    }
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 3] = [
        PositionGroup::Guards,
        PositionGroup::Forwards,
        PositionGroup::Centers,
    ];

    /// The positions that make up this group.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |p| p.group() == *self)
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            PositionGroup::Guards => "guards",
            PositionGroup::Forwards => "forwards",
            PositionGroup::Centers => "centers",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}
