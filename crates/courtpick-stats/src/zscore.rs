// Z-score standardization of per-game stats.

use crate::table::StatLine;
use courtpick_core::{Category, Player};

// ---------------------------------------------------------------------------
// Pool statistics
// ---------------------------------------------------------------------------

/// Mean and standard deviation for a single category across a player pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    pub mean: f64,
    pub stdev: f64,
}

/// Threshold below which standard deviation is treated as zero.
const STDEV_EPSILON: f64 = 1e-9;

/// Compute mean and standard deviation for a slice of values.
///
/// Returns `PoolStats { mean: 0.0, stdev: 0.0 }` for an empty slice.
/// Uses the population standard deviation (N denominator), since the pool
/// is the full eligible player universe rather than a sample. A sample
/// (N - 1) spread would shrink every z-score by `sqrt((N - 1) / N)`.
pub fn compute_pool_stats(values: &[f64]) -> PoolStats {
    if values.is_empty() {
        return PoolStats {
            mean: 0.0,
            stdev: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    PoolStats {
        mean,
        stdev: variance.sqrt(),
    }
}

/// Compute a z-score given a value and pool stats.
///
/// Returns 0.0 if the standard deviation is approximately zero.
pub fn compute_zscore(value: f64, stats: &PoolStats) -> f64 {
    if stats.stdev < STDEV_EPSILON {
        return 0.0;
    }
    (value - stats.mean) / stats.stdev
}

// ---------------------------------------------------------------------------
// Standardization
// ---------------------------------------------------------------------------

/// Pool statistics for `category` over the lines that have a value for it.
pub fn category_pool_stats(lines: &[StatLine], category: Category) -> PoolStats {
    let values: Vec<f64> = lines
        .iter()
        .filter_map(|l| l.values.get(&category).copied().flatten())
        .collect();
    compute_pool_stats(&values)
}

/// Turn raw stat lines into players carrying standardized scores.
///
/// Each category is standardized over the whole `lines` pool. Categories
/// where lower is better are negated afterwards so a higher score is always
/// better. Missing values stay missing and become the sentinel score.
pub fn standardize(lines: &[StatLine], categories: &[Category]) -> Vec<Player> {
    let stats: Vec<(Category, PoolStats)> = categories
        .iter()
        .map(|c| (*c, category_pool_stats(lines, *c)))
        .collect();

    lines
        .iter()
        .map(|line| {
            let scores = stats.iter().filter_map(|(cat, pool)| {
                let raw = line.values.get(cat).copied().flatten()?;
                let z = compute_zscore(raw, pool);
                Some((*cat, if cat.lower_is_better() { -z } else { z }))
            });
            Player::new(line.name.clone(), line.position, scores)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use courtpick_core::{Position, MISSING_SCORE};
    use std::collections::BTreeMap;

    fn line(name: &str, values: &[(Category, Option<f64>)]) -> StatLine {
        StatLine {
            name: name.to_string(),
            position: Position::SmallForward,
            minutes: 30.0,
            values: values.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn pool_stats_basic() {
        let stats = compute_pool_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.stdev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn pool_stats_empty() {
        let stats = compute_pool_stats(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.stdev, 0.0);
    }

    #[test]
    fn zscore_zero_stdev_guard() {
        let stats = PoolStats { mean: 3.0, stdev: 0.0 };
        assert_eq!(compute_zscore(10.0, &stats), 0.0);
    }

    #[test]
    fn standardized_columns_have_zero_mean_unit_spread() {
        let lines = vec![
            line("a", &[(Category::Points, Some(10.0))]),
            line("b", &[(Category::Points, Some(20.0))]),
            line("c", &[(Category::Points, Some(30.0))]),
        ];
        let players = standardize(&lines, &[Category::Points]);
        let scores: Vec<f64> = players.iter().map(|p| p.score(Category::Points)).collect();
        let pool = compute_pool_stats(&scores);
        assert!(pool.mean.abs() < 1e-12);
        assert!((pool.stdev - 1.0).abs() < 1e-12);
        assert!(scores[0] < scores[1] && scores[1] < scores[2]);
    }

    #[test]
    fn turnovers_are_inverted() {
        let lines = vec![
            line("careful", &[(Category::Turnovers, Some(1.0))]),
            line("sloppy", &[(Category::Turnovers, Some(4.0))]),
        ];
        let players = standardize(&lines, &[Category::Turnovers]);
        assert!(players[0].score(Category::Turnovers) > 0.0);
        assert!(players[1].score(Category::Turnovers) < 0.0);
        assert!((players[0].score(Category::Turnovers) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_values_excluded_from_stats_and_become_sentinel() {
        let lines = vec![
            line("a", &[(Category::FreeThrowPct, Some(0.7))]),
            line("b", &[(Category::FreeThrowPct, Some(0.9))]),
            line("c", &[(Category::FreeThrowPct, None)]),
        ];
        let pool = category_pool_stats(&lines, Category::FreeThrowPct);
        assert!((pool.mean - 0.8).abs() < 1e-12);

        let players = standardize(&lines, &[Category::FreeThrowPct]);
        assert!((players[0].score(Category::FreeThrowPct) + 1.0).abs() < 1e-9);
        assert!((players[1].score(Category::FreeThrowPct) - 1.0).abs() < 1e-9);
        assert_eq!(players[2].score(Category::FreeThrowPct), MISSING_SCORE);
    }

    #[test]
    fn categories_not_requested_are_sentinel() {
        let lines = vec![line("a", &[(Category::Points, Some(10.0))])];
        let players = standardize(&lines, &[Category::Points]);
        assert_eq!(players[0].score(Category::Points), 0.0);
        assert_eq!(players[0].score(Category::Blocks), MISSING_SCORE);
    }
}
