// Config -> stats table -> selector, with the solve run off the async runtime.

use courtpick_core::config::Config;
use courtpick_core::{Category, ExclusionSet, Player, RosterRules};
use courtpick_solver::{SolveError, Solution};
use courtpick_stats::StatsError;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to load player stats: {0}")]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("solver did not finish within {0:?}")]
    Timeout(Duration),

    #[error("solver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Everything one solve needs, owned so it can move onto a blocking thread.
#[derive(Debug, Clone)]
pub struct SelectionInput {
    pub players: Vec<Player>,
    pub categories: Vec<Category>,
    pub exclusions: ExclusionSet,
    pub rules: RosterRules,
}

/// Load and standardize the eligible player pool named by `config`.
pub fn load_pool(config: &Config) -> Result<Vec<Player>, StatsError> {
    let path = Path::new(&config.data_paths.stats);
    info!("loading stats from {}", path.display());
    courtpick_stats::load_players(
        path,
        &config.league.categories,
        config.strategy.pool.min_minutes,
    )
}

/// Run `work` on tokio's blocking pool, giving up after `limit`.
///
/// The blocking thread cannot be interrupted; on timeout it is left to finish
/// in the background and its result is discarded.
pub async fn with_timeout<T, F>(limit: Duration, work: F) -> Result<T, RunError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);
    match tokio::time::timeout(limit, task).await {
        Ok(joined) => Ok(joined?),
        Err(_) => {
            warn!("solve exceeded {:?}", limit);
            Err(RunError::Timeout(limit))
        }
    }
}

pub async fn solve(input: SelectionInput, limit: Duration) -> Result<Solution, RunError> {
    let solution = with_timeout(limit, move || {
        courtpick_solver::solve(
            &input.players,
            &input.categories,
            &input.exclusions,
            &input.rules,
        )
    })
    .await??;
    Ok(solution)
}

/// Full batch run: load the pool, build the selection input from `config`,
/// solve under the configured timeout.
pub async fn run(config: &Config) -> Result<Solution, RunError> {
    let players = load_pool(config)?;
    let exclusions = config.exclusions();
    let excluded_in_pool = players.iter().filter(|p| exclusions.contains(&p.name)).count();
    info!(
        "{} eligible players, {} of them rostered elsewhere",
        players.len(),
        excluded_in_pool
    );

    let input = SelectionInput {
        players,
        categories: config.league.categories.clone(),
        exclusions,
        rules: config.roster_rules(),
    };
    let limit = Duration::from_secs(config.strategy.solver.timeout_secs);
    solve(input, limit).await
}
