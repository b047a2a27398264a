// Mixed-integer model for joint roster and category selection.
//
// Variables:
//   x[p]    binary, player p is drafted
//   y[c]    binary, category c is targeted
//   z[p][c] continuous in [0, 1], equal to x[p] AND y[c]
//
// The objective sum(x[p] * y[c] * score(p, c)) is bilinear; it is linearized
// by substituting z[p][c] for each product, tied down with
//   z <= x,  z <= y,  z >= x + y - 1.
// With x and y integral these force z to the product, so z needs no
// integrality of its own.

use crate::SolveError;
use courtpick_core::{Category, ExclusionSet, Player, Position, PositionGroup, RosterRules};
use good_lp::{
    constraint, microlp, variable, Constraint, Expression, ProblemVariables, ResolutionError,
    Solution as _, SolverModel, Variable,
};
use tracing::debug;

/// Indices of the players and categories chosen by a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub players: Vec<usize>,
    pub categories: Vec<usize>,
}

pub struct SelectionModel<'a> {
    players: &'a [Player],
    categories: &'a [Category],
    vars: ProblemVariables,
    picks: Vec<Variable>,
    targets: Vec<Variable>,
    pairs: Vec<Vec<Variable>>,
    constraints: Vec<Constraint>,
}

impl<'a> SelectionModel<'a> {
    /// Declare every variable and the linking constraints for the product terms.
    pub fn new(players: &'a [Player], categories: &'a [Category]) -> Self {
        let mut vars = ProblemVariables::new();
        let picks: Vec<Variable> = players.iter().map(|_| vars.add(variable().binary())).collect();
        let targets: Vec<Variable> = categories
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut constraints = Vec::with_capacity(players.len() * categories.len() * 3);
        let mut pairs = Vec::with_capacity(players.len());
        for &x in &picks {
            let row: Vec<Variable> = targets
                .iter()
                .map(|&y| {
                    let z = vars.add(variable().min(0.0).max(1.0));
                    constraints.push(constraint!(z <= x));
                    constraints.push(constraint!(z <= y));
                    constraints.push(constraint!(z >= x + y - 1.0));
                    z
                })
                .collect();
            pairs.push(row);
        }

        SelectionModel {
            players,
            categories,
            vars,
            picks,
            targets,
            pairs,
            constraints,
        }
    }

    /// Total expected score: every (player, category) product weighted by
    /// the player's standardized score in that category.
    fn objective(&self) -> Expression {
        let mut objective = Expression::with_capacity(self.players.len() * self.categories.len());
        for (player, row) in self.players.iter().zip(&self.pairs) {
            for (category, &z) in self.categories.iter().zip(row) {
                objective.add_mul(player.score(*category), z);
            }
        }
        objective
    }

    fn count_where(&self, keep: impl Fn(&Player) -> bool) -> Expression {
        let mut count = Expression::with_capacity(self.players.len());
        for (player, &x) in self.players.iter().zip(&self.picks) {
            if keep(player) {
                count += x;
            }
        }
        count
    }

    /// Roster cap.
    pub fn limit_roster(&mut self, max_roster: usize) {
        let roster = self.count_where(|_| true);
        let cap = max_roster as f64;
        self.constraints.push(constraint!(roster <= cap));
    }

    /// Category breadth floor.
    pub fn require_categories(&mut self, min_categories: usize) {
        let mut chosen = Expression::with_capacity(self.targets.len());
        for &y in &self.targets {
            chosen += y;
        }
        let floor = min_categories as f64;
        self.constraints.push(constraint!(chosen >= floor));
    }

    /// At least `minimum` drafted players listed at `position`.
    pub fn require_position(&mut self, position: Position, minimum: usize) {
        if minimum == 0 {
            return;
        }
        let count = self.count_where(|p| p.position == position);
        let floor = minimum as f64;
        self.constraints.push(constraint!(count >= floor));
    }

    /// At least `minimum` drafted players whose position falls in `group`.
    pub fn require_group(&mut self, group: PositionGroup, minimum: usize) {
        if minimum == 0 {
            return;
        }
        let count = self.count_where(|p| p.position.group() == group);
        let floor = minimum as f64;
        self.constraints.push(constraint!(count >= floor));
    }

    /// Pin `x[p] = 0` for every excluded player.
    pub fn exclude(&mut self, exclusions: &ExclusionSet) {
        for (player, &x) in self.players.iter().zip(&self.picks) {
            if exclusions.contains(&player.name) {
                self.constraints.push(constraint!(x == 0.0));
            }
        }
    }

    /// Add every rule of `rules` to the model.
    pub fn apply_rules(&mut self, rules: &RosterRules) {
        self.limit_roster(rules.max_roster);
        self.require_categories(rules.min_categories);
        for (&position, &minimum) in &rules.position_minimums {
            self.require_position(position, minimum);
        }
        for (&group, &minimum) in &rules.group_minimums {
            self.require_group(group, minimum);
        }
    }

    /// Maximize the objective subject to every constraint added so far.
    pub fn solve(self) -> Result<Selection, SolveError> {
        let objective = self.objective();
        debug!(
            "solving model: {} players, {} categories, {} constraints",
            self.picks.len(),
            self.targets.len(),
            self.constraints.len()
        );

        let mut problem = self.vars.maximise(objective).using(microlp);
        for c in self.constraints {
            problem = problem.with(c);
        }

        let solution = problem.solve().map_err(|e| match e {
            ResolutionError::Infeasible => SolveError::Infeasible {
                reason: "the solver proved the constraint set unsatisfiable".into(),
            },
            other => SolveError::Solver(other.to_string()),
        })?;

        let chosen = |vars: &[Variable]| -> Vec<usize> {
            vars.iter()
                .enumerate()
                .filter(|(_, v)| solution.value(**v) > 0.5)
                .map(|(i, _)| i)
                .collect()
        };

        Ok(Selection {
            players: chosen(&self.picks),
            categories: chosen(&self.targets),
        })
    }
}
