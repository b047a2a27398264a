// Per-game stats table reading.
//
// Expects a Basketball-Reference style per-game CSV: one row per player with
// `Player`, `Pos`, `MP` and one column per scoring category. Other columns
// (`Rk`, `Age`, `Tm`/`Team`, `FGA`, ...) are ignored.

use crate::StatsError;
use courtpick_core::{Category, Position};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use tracing::warn;

pub const PLAYER_COLUMN: &str = "Player";
pub const POSITION_COLUMN: &str = "Pos";
pub const MINUTES_COLUMN: &str = "MP";

/// One row of raw (unstandardized) per-game numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub name: String,
    pub position: Position,
    pub minutes: f64,
    /// Raw value per requested category; `None` where the cell is blank or
    /// not a finite number (e.g. FT% for a player with no attempts).
    pub values: BTreeMap<Category, Option<f64>>,
}

/// Column indices of everything the reader needs.
struct Layout {
    player: usize,
    position: usize,
    minutes: usize,
    categories: Vec<(Category, usize)>,
}

impl Layout {
    fn from_headers(headers: &csv::StringRecord, categories: &[Category]) -> Result<Self, StatsError> {
        let missing = |label: &str| StatsError::SchemaMismatch {
            column: label.to_string(),
        };
        let find = |label: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(label))
                .ok_or_else(|| missing(label))
        };
        let mut cat_cols = Vec::with_capacity(categories.len());
        for cat in categories {
            let idx = headers
                .iter()
                .position(|h| Category::from_label(h) == Some(*cat))
                .ok_or_else(|| missing(cat.label()))?;
            cat_cols.push((*cat, idx));
        }
        Ok(Layout {
            player: find(PLAYER_COLUMN)?,
            position: find(POSITION_COLUMN)?,
            minutes: find(MINUTES_COLUMN)?,
            categories: cat_cols,
        })
    }
}

fn parse_number(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|f| f.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Read stat lines for `categories` from CSV data.
///
/// Header labels match case-insensitively. A row that cannot be framed (wrong
/// field count, invalid UTF-8) fails the whole read with `DataUnavailable`.
/// Rows are skipped with a warning when `MP` is not a number or the position
/// is not one of PG/SG/SF/PF/C. A player
/// listed more than once keeps only the first row, which for traded players
/// is the season total.
pub fn read_stat_lines<R: Read>(
    rdr: R,
    categories: &[Category],
    source: &str,
) -> Result<Vec<StatLine>, StatsError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader
        .headers()
        .map_err(|e| StatsError::DataUnavailable {
            path: source.to_string(),
            source: e,
        })?
        .clone();
    let layout = Layout::from_headers(&headers, categories)?;

    let mut lines = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(|e| StatsError::DataUnavailable {
            path: source.to_string(),
            source: e,
        })?;

        let name = record.get(layout.player).unwrap_or_default().trim().to_string();
        if name.is_empty() {
            continue;
        }

        let Some(minutes) = parse_number(record.get(layout.minutes)) else {
            // Repeated header rows land here too.
            warn!("skipping '{}': unparseable {} value", name, MINUTES_COLUMN);
            continue;
        };

        let pos_raw = record.get(layout.position).unwrap_or_default();
        let Some(position) = Position::from_str_pos(pos_raw) else {
            warn!("skipping '{}': unknown position '{}'", name, pos_raw);
            continue;
        };

        if !seen.insert(name.clone()) {
            warn!("duplicate row for '{}', keeping the first", name);
            continue;
        }

        let values = layout
            .categories
            .iter()
            .map(|(cat, idx)| (*cat, parse_number(record.get(*idx))))
            .collect();

        lines.push(StatLine {
            name,
            position,
            minutes,
            values,
        });
    }

    Ok(lines)
}
