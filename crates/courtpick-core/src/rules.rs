// Roster quotas the selector must satisfy.

use crate::position::{Position, PositionGroup};
use serde::Serialize;
use std::collections::BTreeMap;

/// Hard limits on a selected roster.
///
/// Position and group minimums are inclusive lower bounds: a minimum of 2 at
/// point guard means the roster holds at least two point guards. Positions or
/// groups without an entry have no minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRules {
    pub max_roster: usize,
    pub min_categories: usize,
    pub position_minimums: BTreeMap<Position, usize>,
    pub group_minimums: BTreeMap<PositionGroup, usize>,
}

impl Default for RosterRules {
    /// Ten roster spots, at least six categories, two of each guard and
    /// forward position, four of each group.
    fn default() -> Self {
        RosterRules {
            max_roster: 10,
            min_categories: 6,
            position_minimums: [
                (Position::PointGuard, 2),
                (Position::ShootingGuard, 2),
                (Position::SmallForward, 2),
                (Position::PowerForward, 2),
            ]
            .into_iter()
            .collect(),
            group_minimums: [
                (PositionGroup::Guards, 4),
                (PositionGroup::Forwards, 4),
                (PositionGroup::Centers, 4),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl RosterRules {
    /// Rules with only a roster cap and a category floor.
    pub fn unconstrained(max_roster: usize, min_categories: usize) -> Self {
        RosterRules {
            max_roster,
            min_categories,
            position_minimums: BTreeMap::new(),
            group_minimums: BTreeMap::new(),
        }
    }

    pub fn position_minimum(&self, position: Position) -> usize {
        self.position_minimums.get(&position).copied().unwrap_or(0)
    }

    pub fn group_minimum(&self, group: PositionGroup) -> usize {
        self.group_minimums.get(&group).copied().unwrap_or(0)
    }

    /// Fewest players any feasible roster carries in `group`: the larger of
    /// the group minimum and the sum of its positions' minimums.
    pub fn group_requirement(&self, group: PositionGroup) -> usize {
        let from_positions: usize = group.positions().map(|p| self.position_minimum(p)).sum();
        self.group_minimum(group).max(from_positions)
    }

    /// Fewest players any feasible roster carries overall. Groups are
    /// disjoint, so this is the sum of the group requirements.
    pub fn required_roster_size(&self) -> usize {
        PositionGroup::ALL
            .into_iter()
            .map(|g| self.group_requirement(g))
            .sum()
    }
}
