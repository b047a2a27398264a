// Player records as consumed by the roster selector.

use crate::category::Category;
use crate::position::Position;
use serde::Serialize;
use std::collections::BTreeMap;

/// Score substituted for a missing or non-finite category value. Large enough
/// that the selector never leans on a player for a category it has no data for.
pub const MISSING_SCORE: f64 = -1000.0;

/// An eligible player with one standardized score per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    scores: BTreeMap<Category, f64>,
}

impl Player {
    /// Build a player from whatever scores are known.
    ///
    /// Categories not present in `scores`, or present with a NaN/infinite
    /// value, are filled with [`MISSING_SCORE`], so every player carries an
    /// entry for every category.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        scores: impl IntoIterator<Item = (Category, f64)>,
    ) -> Self {
        let mut full: BTreeMap<Category, f64> =
            Category::ALL.into_iter().map(|c| (c, MISSING_SCORE)).collect();
        for (cat, value) in scores {
            if value.is_finite() {
                full.insert(cat, value);
            }
        }
        Player {
            name: name.into(),
            position,
            scores: full,
        }
    }

    /// Standardized score for `category`.
    pub fn score(&self, category: Category) -> f64 {
        self.scores.get(&category).copied().unwrap_or(MISSING_SCORE)
    }

    pub fn scores(&self) -> &BTreeMap<Category, f64> {
        &self.scores
    }
}
