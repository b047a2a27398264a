// Shared domain types for roster and category selection: categories,
// positions, players, roster rules, exclusions and configuration.

pub mod category;
pub mod config;
pub mod exclusions;
pub mod player;
pub mod position;
pub mod rules;

pub use category::Category;
pub use exclusions::ExclusionSet;
pub use player::{Player, MISSING_SCORE};
pub use position::{Position, PositionGroup};
pub use rules::RosterRules;
