// Result of a successful selection.

use courtpick_core::{Category, Player, Position, PositionGroup};
use serde::Serialize;

/// Expected team total in one targeted category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    /// Drafted players, in input order.
    pub players: Vec<Player>,
    /// Targeted categories, in input order.
    pub categories: Vec<Category>,
    /// Sum of drafted players' scores per targeted category, highest first.
    pub category_totals: Vec<CategoryTotal>,
    /// Sum of `category_totals`; the maximized objective.
    pub objective: f64,
}

impl Solution {
    /// Build the solution and recompute totals from the chosen players' scores
    /// rather than trusting the solver's floating-point objective.
    pub fn new(players: Vec<Player>, categories: Vec<Category>) -> Self {
        let mut category_totals: Vec<CategoryTotal> = categories
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: players.iter().map(|p| p.score(category)).sum(),
            })
            .collect();
        category_totals.sort_by(|a, b| b.total.total_cmp(&a.total));
        let objective = category_totals.iter().map(|t| t.total).sum();

        Solution {
            players,
            categories,
            category_totals,
            objective,
        }
    }

    pub fn roster_size(&self) -> usize {
        self.players.len()
    }

    pub fn position_count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    pub fn group_count(&self, group: PositionGroup) -> usize {
        self.players
            .iter()
            .filter(|p| p.position.group() == group)
            .count()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn targets(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
