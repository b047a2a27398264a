// Scoring categories of a nine-category basketball league.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A statistical category a fantasy roster is scored on.
///
/// The serde names match the column labels of the per-game stats table
/// (`FG%`, `3P`, ...) so categories round-trip through TOML and JSON using
/// the same spelling the data source uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[serde(rename = "FT%")]
    FreeThrowPct,
    #[serde(rename = "3P")]
    ThreePointers,
    #[serde(rename = "TRB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "TOV")]
    Turnovers,
    #[serde(rename = "PTS")]
    Points,
}

impl Category {
    /// Every category, in table column order.
    pub const ALL: [Category; 9] = [
        Category::FieldGoalPct,
        Category::FreeThrowPct,
        Category::ThreePointers,
        Category::Rebounds,
        Category::Assists,
        Category::Steals,
        Category::Blocks,
        Category::Turnovers,
        Category::Points,
    ];

    /// Column label used by the stats table and the config files.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FieldGoalPct => "FG%",
            Category::FreeThrowPct => "FT%",
            Category::ThreePointers => "3P",
            Category::Rebounds => "TRB",
            Category::Assists => "AST",
            Category::Steals => "STL",
            Category::Blocks => "BLK",
            Category::Turnovers => "TOV",
            Category::Points => "PTS",
        }
    }

    /// Parse a column label. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }

    /// Whether a smaller raw value is better. Such categories are
    /// sign-inverted before standardization so that larger is always better.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Category::Turnovers)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
