// Configuration loading and parsing (league.toml, strategy.toml).

use crate::category::Category;
use crate::exclusions::ExclusionSet;
use crate::position::{Position, PositionGroup};
use crate::rules::RosterRules;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub strategy: StrategyConfig,
    pub data_paths: DataPaths,
}

impl Config {
    /// Roster quotas assembled from `[league.roster]`, `[league.positions]`
    /// and `[league.groups]`.
    pub fn roster_rules(&self) -> RosterRules {
        self.league.roster_rules()
    }

    /// Every player on another team's roster.
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::from_teams(&self.league.teams)
    }
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[league]` table in league.toml.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub categories: Vec<Category>,
    pub roster: RosterSection,
    #[serde(default)]
    pub positions: PositionMinimums,
    #[serde(default)]
    pub groups: GroupMinimums,
    /// Other teams' rosters, keyed by team name. Everyone listed here is
    /// excluded from selection.
    #[serde(default)]
    pub teams: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSection {
    pub max_roster: usize,
    pub min_categories: usize,
}

/// Per-position minimum counts. Field names match the TOML keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(non_snake_case)]
pub struct PositionMinimums {
    #[serde(default)]
    pub PG: usize,
    #[serde(default)]
    pub SG: usize,
    #[serde(default)]
    pub SF: usize,
    #[serde(default)]
    pub PF: usize,
    #[serde(default)]
    pub C: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupMinimums {
    #[serde(default)]
    pub guards: usize,
    #[serde(default)]
    pub forwards: usize,
    #[serde(default)]
    pub centers: usize,
}

impl LeagueConfig {
    pub fn roster_rules(&self) -> RosterRules {
        let p = &self.positions;
        let g = &self.groups;
        RosterRules {
            max_roster: self.roster.max_roster,
            min_categories: self.roster.min_categories,
            position_minimums: [
                (Position::PointGuard, p.PG),
                (Position::ShootingGuard, p.SG),
                (Position::SmallForward, p.SF),
                (Position::PowerForward, p.PF),
                (Position::Center, p.C),
            ]
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .collect(),
            group_minimums: [
                (PositionGroup::Guards, g.guards),
                (PositionGroup::Forwards, g.forwards),
                (PositionGroup::Centers, g.centers),
            ]
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// strategy.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire strategy.toml file.
#[derive(Debug, Clone, Deserialize)]
struct StrategyFile {
    pool: PoolConfig,
    solver: SolverConfig,
    #[serde(default)]
    output: OutputConfig,
    data_paths: DataPaths,
}

/// The public strategy config assembled from the strategy.toml sections.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    pub pool: PoolConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Minutes per game a player needs to enter the eligible pool.
    pub min_minutes: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub stats: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/league.toml` and
/// `config/strategy.toml`, relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    let league_path = config_dir.join("league.toml");
    let league_file: LeagueFile = parse_file(&league_path)?;

    let strategy_path = config_dir.join("strategy.toml");
    let strategy_file: StrategyFile = parse_file(&strategy_path)?;

    let config = Config {
        league: league_file.league,
        strategy: StrategyConfig {
            pool: strategy_file.pool,
            solver: strategy_file.solver,
            output: strategy_file.output,
        },
        data_paths: strategy_file.data_paths,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    let copy_err = |message: String| ConfigError::DefaultsCopyError { message };

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| copy_err(format!("failed to create config directory: {e}")))?;

    let entries = std::fs::read_dir(&defaults_dir)
        .map_err(|e| copy_err(format!("failed to read defaults directory: {e}")))?;

    let mut copied = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| copy_err(format!("failed to read defaults entry: {e}")))?
            .path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }

        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path)
                    .map_err(|e| copy_err(format!("failed to read {}: {e}", path.display())))?;
                std::io::Write::write_all(&mut dest, &content)
                    .map_err(|e| copy_err(format!("failed to write {}: {e}", target.display())))?;
                tracing::info!("copied default config {}", target.display());
                copied.push(target);
            }
            // Already present in config/; a user's edits win.
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(copy_err(format!("failed to create {}: {e}", target.display())));
            }
        }
    }

    Ok(copied)
}

/// Loads config relative to the current working directory, copying default
/// files into `config/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

// Quota combinations that no roster can satisfy are deliberately not rejected
// here; the selector reports them as infeasible.
fn validate(config: &Config) -> Result<(), ConfigError> {
    let league = &config.league;

    if league.categories.is_empty() {
        return Err(invalid("league.categories", "must list at least one category"));
    }
    let mut seen = HashSet::new();
    for cat in &league.categories {
        if !seen.insert(cat) {
            return Err(invalid("league.categories", format!("duplicate category {cat}")));
        }
    }

    if league.roster.max_roster == 0 {
        return Err(invalid("league.roster.max_roster", "must be greater than 0"));
    }

    for (team, players) in &league.teams {
        if players.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid(
                &format!("league.teams.{team}"),
                "player names must not be blank",
            ));
        }
    }

    let min_minutes = config.strategy.pool.min_minutes;
    if !min_minutes.is_finite() || min_minutes < 0.0 {
        return Err(invalid(
            "pool.min_minutes",
            format!("must be a finite value >= 0, got {min_minutes}"),
        ));
    }

    if config.strategy.solver.timeout_secs == 0 {
        return Err(invalid("solver.timeout_secs", "must be > 0"));
    }

    if config.data_paths.stats.trim().is_empty() {
        return Err(invalid("data_paths.stats", "must not be empty"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
