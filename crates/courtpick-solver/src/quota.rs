// Counting checks that rule out impossible quota combinations before a model
// is built. Every failure here is a proof of infeasibility; passing says
// nothing and the solver still decides.

use crate::SolveError;
use courtpick_core::{Category, ExclusionSet, Player, Position, PositionGroup, RosterRules};
use std::collections::BTreeMap;

/// Players still available at each position once exclusions are removed.
pub fn selectable_by_position(
    players: &[Player],
    exclusions: &ExclusionSet,
) -> BTreeMap<Position, usize> {
    let mut counts: BTreeMap<Position, usize> = Position::ALL.into_iter().map(|p| (p, 0)).collect();
    for p in players.iter().filter(|p| !exclusions.contains(&p.name)) {
        *counts.entry(p.position).or_default() += 1;
    }
    counts
}

pub fn check_quotas(
    players: &[Player],
    categories: &[Category],
    exclusions: &ExclusionSet,
    rules: &RosterRules,
) -> Result<(), SolveError> {
    if categories.len() < rules.min_categories {
        return Err(SolveError::Infeasible {
            reason: format!(
                "at least {} categories required but only {} offered",
                rules.min_categories,
                categories.len()
            ),
        });
    }

    let available = selectable_by_position(players, exclusions);

    for position in Position::ALL {
        let needed = rules.position_minimum(position);
        let have = available[&position];
        if have < needed {
            return Err(SolveError::Infeasible {
                reason: format!("{needed} {position} required but only {have} selectable"),
            });
        }
    }

    for group in PositionGroup::ALL {
        let needed = rules.group_requirement(group);
        let have: usize = group.positions().map(|p| available[&p]).sum();
        if have < needed {
            return Err(SolveError::Infeasible {
                reason: format!("{needed} {group} required but only {have} selectable"),
            });
        }
    }

    let required = rules.required_roster_size();
    if required > rules.max_roster {
        return Err(SolveError::Infeasible {
            reason: format!(
                "position and group minimums need at least {required} players \
                 but the roster cap is {}",
                rules.max_roster
            ),
        });
    }

    Ok(())
}
