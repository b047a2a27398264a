// Plain-text and JSON rendering of a solution.

use courtpick_solver::Solution;
use std::fmt::Write;

const NAME_WIDTH: usize = 26;
const SCORE_WIDTH: usize = 8;

/// Human-readable report: targeted categories, the roster with each player's
/// scores in those categories, then the per-category expected totals.
pub fn render_table(solution: &Solution) -> String {
    let mut out = String::new();

    let labels: Vec<&str> = solution.categories.iter().map(|c| c.label()).collect();
    let _ = writeln!(out, "Selected Categories: {}", labels.join(", "));
    let _ = writeln!(out);

    let _ = writeln!(out, "Selected Players ({}):", solution.roster_size());
    let _ = write!(out, "{:<NAME_WIDTH$} {:<4}", "Player", "Pos");
    for label in &labels {
        let _ = write!(out, " {label:>SCORE_WIDTH$}");
    }
    let _ = writeln!(out);
    for player in &solution.players {
        let _ = write!(out, "{:<NAME_WIDTH$} {:<4}", player.name, player.position.display_str());
        for category in &solution.categories {
            let _ = write!(out, " {:>SCORE_WIDTH$.3}", player.score(*category));
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Expected Score Per Category:");
    for total in &solution.category_totals {
        let _ = writeln!(out, "{:<6} {:>SCORE_WIDTH$.3}", total.category.label(), total.total);
    }
    let _ = writeln!(out, "{:<6} {:>SCORE_WIDTH$.3}", "Total", solution.objective);

    out
}

pub fn render_json(solution: &Solution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtpick_core::{Category, Player, Position};

    fn sample() -> Solution {
        let players = vec![
            Player::new(
                "Point Man",
                Position::PointGuard,
                [(Category::Assists, 2.0), (Category::Points, 1.0)],
            ),
            Player::new(
                "Big Body",
                Position::Center,
                [(Category::Assists, -0.5), (Category::Points, 0.75)],
            ),
        ];
        Solution::new(players, vec![Category::Points, Category::Assists])
    }

    #[test]
    fn table_lists_categories_roster_and_totals() {
        let text = render_table(&sample());
        assert!(text.starts_with("Selected Categories: PTS, AST\n"));
        assert!(text.contains("Selected Players (2):"));
        assert!(text.contains("Point Man"));
        assert!(text.contains("Big Body"));

        let totals = text.split("Expected Score Per Category:").nth(1).unwrap();
        let ast = totals.find("AST").unwrap();
        let pts = totals.find("PTS").unwrap();
        assert!(pts < ast, "PTS (1.750) should be listed before AST (1.500)");
        assert!(totals.contains("1.750"));
        assert!(totals.contains("3.250"));
    }

    #[test]
    fn json_uses_column_labels() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categories"], serde_json::json!(["PTS", "AST"]));
        assert_eq!(value["players"][0]["name"], "Point Man");
        assert_eq!(value["players"][0]["position"], "PG");
        assert_eq!(value["players"][1]["scores"]["PTS"], 0.75);
        assert_eq!(value["category_totals"][0]["category"], "PTS");
        assert_eq!(value["objective"], 3.25);
    }
}
