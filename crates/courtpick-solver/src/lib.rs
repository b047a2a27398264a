// Roster/category selector: chooses the players and scoring categories that
// jointly maximize a team's standardized total under roster quotas.

pub mod error;
pub mod model;
pub mod quota;
pub mod solution;

pub use error::SolveError;
pub use solution::{CategoryTotal, Solution};

use courtpick_core::{Category, ExclusionSet, Player, RosterRules};
use model::SelectionModel;
use std::collections::HashSet;
use tracing::info;

/// Select a roster and a set of target categories.
///
/// Maximizes the sum over drafted players and targeted categories of each
/// player's standardized score, subject to `rules` and `exclusions`. Returns
/// [`SolveError::Infeasible`] when no roster satisfies every rule; constraints
/// are never relaxed to force an answer.
pub fn solve(
    players: &[Player],
    categories: &[Category],
    exclusions: &ExclusionSet,
    rules: &RosterRules,
) -> Result<Solution, SolveError> {
    validate_input(players, categories)?;
    info!(
        "selecting up to {} of {} players across {} categories ({} excluded names)",
        rules.max_roster,
        players.len(),
        categories.len(),
        exclusions.len()
    );

    quota::check_quotas(players, categories, exclusions, rules)?;

    let mut model = SelectionModel::new(players, categories);
    model.apply_rules(rules);
    model.exclude(exclusions);
    let selection = model.solve()?;

    let solution = Solution::new(
        selection.players.iter().map(|&i| players[i].clone()).collect(),
        selection.categories.iter().map(|&i| categories[i]).collect(),
    );
    info!(
        "selected {} players and {} categories, objective {:.3}",
        solution.roster_size(),
        solution.categories.len(),
        solution.objective
    );
    Ok(solution)
}

fn validate_input(players: &[Player], categories: &[Category]) -> Result<(), SolveError> {
    let mut names = HashSet::with_capacity(players.len());
    for p in players {
        if !names.insert(p.name.as_str()) {
            return Err(SolveError::InvalidInput(format!(
                "player '{}' appears more than once",
                p.name
            )));
        }
    }
    let mut seen = HashSet::with_capacity(categories.len());
    for c in categories {
        if !seen.insert(*c) {
            return Err(SolveError::InvalidInput(format!(
                "category {c} appears more than once"
            )));
        }
    }
    Ok(())
}
