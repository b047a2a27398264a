// Input table provider: loads a per-game stats table, keeps players above the
// minutes threshold and standardizes every scoring category.

pub mod table;
pub mod zscore;

use courtpick_core::{Category, Player};
use std::io::Read;
use std::path::Path;
use tracing::info;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("stats table {path} is unavailable: {source}")]
    DataUnavailable { path: String, source: csv::Error },

    #[error("stats table is missing required column `{column}`")]
    SchemaMismatch { column: String },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load eligible players from the CSV at `path`.
///
/// Players averaging fewer than `min_minutes` minutes per game are dropped
/// before standardization, so scores are relative to the eligible pool only.
pub fn load_players(
    path: &Path,
    categories: &[Category],
    min_minutes: f64,
) -> Result<Vec<Player>, StatsError> {
    let file = std::fs::File::open(path).map_err(|e| StatsError::DataUnavailable {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    load_players_from_reader(file, categories, min_minutes, &path.display().to_string())
}

/// Reader-based variant of [`load_players`]; `source` names the data in errors.
pub fn load_players_from_reader<R: Read>(
    rdr: R,
    categories: &[Category],
    min_minutes: f64,
    source: &str,
) -> Result<Vec<Player>, StatsError> {
    let lines = table::read_stat_lines(rdr, categories, source)?;
    let total = lines.len();

    let eligible: Vec<_> = lines
        .into_iter()
        .filter(|l| l.minutes >= min_minutes)
        .collect();
    info!(
        "keeping {} of {} players with at least {} minutes per game",
        eligible.len(),
        total,
        min_minutes
    );

    if eligible.is_empty() {
        return Err(StatsError::Validation(format!(
            "no players in {source} meet the {min_minutes} minute threshold"
        )));
    }

    Ok(zscore::standardize(&eligible, categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtpick_core::MISSING_SCORE;

    const SAMPLE: &str = "\
Rk,Player,Age,Tm,Pos,G,MP,FG%,3P,TRB,AST,STL,BLK,TOV,FT%,PTS
1,Star Guard,26,LAL,PG,70,35.0,.480,3.0,5.0,8.0,1.5,0.3,3.0,.880,27.0
2,Role Wing,28,BOS,SF,75,24.0,.450,1.5,4.0,2.0,1.0,0.5,1.0,.780,10.0
3,Rim Runner,24,MEM,C,66,28.0,.650,0.0,10.0,1.5,0.7,2.2,1.5,,14.0
4,Deep Bench,22,SAS,SG,30,6.0,.350,0.5,1.0,0.5,0.2,0.0,0.4,.700,2.0";

    #[test]
    fn filters_by_minutes_before_standardizing() {
        let players =
            load_players_from_reader(SAMPLE.as_bytes(), &Category::ALL, 15.0, "sample").unwrap();
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Star Guard", "Role Wing", "Rim Runner"]);

        let pts_sum: f64 = players.iter().map(|p| p.score(Category::Points)).sum();
        assert!(pts_sum.abs() < 1e-9);
    }

    #[test]
    fn every_player_has_every_category() {
        let players =
            load_players_from_reader(SAMPLE.as_bytes(), &Category::ALL, 15.0, "sample").unwrap();
        for p in &players {
            assert_eq!(p.scores().len(), Category::ALL.len());
        }
        assert_eq!(players[2].score(Category::FreeThrowPct), MISSING_SCORE);
        assert!(players[2].score(Category::Blocks) > 0.0);
        // Fewest turnovers in the pool scores best.
        assert!(players[1].score(Category::Turnovers) > players[0].score(Category::Turnovers));
    }

    #[test]
    fn threshold_excluding_everyone_is_validation_error() {
        let err = load_players_from_reader(SAMPLE.as_bytes(), &Category::ALL, 48.1, "sample")
            .unwrap_err();
        assert!(matches!(err, StatsError::Validation(_)));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let path = std::env::temp_dir().join("courtpick_stats_does_not_exist.csv");
        let _ = std::fs::remove_file(&path);
        let err = load_players(&path, &Category::ALL, 15.0).unwrap_err();
        match err {
            StatsError::DataUnavailable { path: p, .. } => {
                assert!(p.ends_with("courtpick_stats_does_not_exist.csv"))
            }
            other => panic!("expected DataUnavailable, got: {other}"),
        }
    }

    #[test]
    fn load_players_reads_from_disk() {
        let path = std::env::temp_dir().join("courtpick_stats_sample.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let players = load_players(&path, &[Category::Points], 0.0).unwrap();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0].score(Category::Assists), MISSING_SCORE);
        let _ = std::fs::remove_file(&path);
    }
}
