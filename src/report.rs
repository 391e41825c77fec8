//! Final standings assembly and console summary
//!
//! Turns a finished ledger into sorted output rows. Sorting uses a total
//! order with a name tie-break so repeated runs over the same input produce
//! byte-identical tables.

use crate::rating::ledger::{DivisionLedger, GlobalLedger};
use crate::types::{Bout, DivisionStandingsRow, Outcome, StandingsRow};
use std::collections::HashMap;

/// Build the promotion-wide standings table, highest rating first.
///
/// Win tallies are recomputed from the bout list rather than tracked by the
/// ledger; the win ratio divides by the ledger's bout count.
pub fn build_standings(ledger: &GlobalLedger, bouts: &[Bout]) -> Vec<StandingsRow> {
    let mut wins: HashMap<&str, u32> = HashMap::new();
    for bout in bouts {
        match bout.outcome {
            Outcome::RedWin => *wins.entry(bout.red.as_str()).or_default() += 1,
            Outcome::BlueWin => *wins.entry(bout.blue.as_str()).or_default() += 1,
            Outcome::DrawOrOther => {}
        }
    }

    let mut rows: Vec<StandingsRow> = ledger
        .entries()
        .map(|(fighter, entry)| {
            let fighter_wins = wins.get(fighter.as_str()).copied().unwrap_or(0);
            let win_ratio = if entry.bouts == 0 {
                0.0
            } else {
                fighter_wins as f64 / entry.bouts as f64
            };

            StandingsRow {
                fighter: fighter.clone(),
                rating: entry.rating,
                bouts: entry.bouts,
                wins: fighter_wins,
                win_ratio,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| a.fighter.cmp(&b.fighter))
    });

    rows
}

/// Build the per-division standings table, grouped by division with the
/// highest rating first within each group.
pub fn build_division_standings(ledger: &DivisionLedger) -> Vec<DivisionStandingsRow> {
    let mut rows: Vec<DivisionStandingsRow> = ledger
        .entries()
        .map(|(fighter, division, entry)| DivisionStandingsRow {
            fighter: fighter.clone(),
            division: division.clone(),
            rating: entry.rating,
            bouts: entry.bouts,
        })
        .collect();

    rows.sort_by(|a, b| {
        a.division
            .cmp(&b.division)
            .then_with(|| b.rating.total_cmp(&a.rating))
            .then_with(|| a.fighter.cmp(&b.fighter))
    });

    rows
}

/// Print the leading standings rows to the console
pub fn print_top_standings(rows: &[StandingsRow], count: usize) {
    println!("Top {} fighters by rating:", count.min(rows.len()));
    println!(
        "{:<4} {:<28} {:>8} {:>7} {:>5} {:>10}",
        "#", "Fighter", "Rating", "Fights", "Wins", "Win ratio"
    );
    for (i, row) in rows.iter().take(count).enumerate() {
        println!(
            "{:<4} {:<28} {:>8.1} {:>7} {:>5} {:>10.2}",
            i + 1,
            row.fighter,
            row.rating,
            row.bouts,
            row.wins,
            row.win_ratio
        );
    }
}

/// Print the leading per-division standings rows to the console
pub fn print_top_division_standings(rows: &[DivisionStandingsRow], count: usize) {
    println!("Top {} entries by division:", count.min(rows.len()));
    println!(
        "{:<4} {:<28} {:<18} {:>8} {:>7}",
        "#", "Fighter", "Division", "Rating", "Fights"
    );
    for (i, row) in rows.iter().take(count).enumerate() {
        println!(
            "{:<4} {:<28} {:<18} {:>8.1} {:>7}",
            i + 1,
            row.fighter,
            row.division,
            row.rating,
            row.bouts
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FinishMethod;
    use chrono::NaiveDate;

    fn bout(red: &str, blue: &str, outcome: Outcome) -> Bout {
        Bout {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            red: red.to_string(),
            blue: blue.to_string(),
            outcome,
            method: FinishMethod::Other,
            division: None,
        }
    }

    #[test]
    fn test_standings_tally_wins_and_ratio() {
        let mut ledger = GlobalLedger::new(1500.0);
        ledger.update("A", 1540.0, true);
        ledger.update("A", 1560.0, true);
        ledger.update("B", 1470.0, true);
        ledger.update("B", 1450.0, true);

        let bouts = vec![
            bout("A", "B", Outcome::RedWin),
            bout("B", "A", Outcome::BlueWin),
        ];

        let rows = build_standings(&ledger, &bouts);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fighter, "A");
        assert_eq!(rows[0].wins, 2);
        assert_eq!(rows[0].win_ratio, 1.0);
        assert_eq!(rows[1].fighter, "B");
        assert_eq!(rows[1].wins, 0);
        assert_eq!(rows[1].win_ratio, 0.0);
    }

    #[test]
    fn test_standings_draws_count_no_wins() {
        let mut ledger = GlobalLedger::new(1500.0);
        ledger.update("A", 1500.0, true);
        ledger.update("B", 1500.0, true);

        let rows = build_standings(&ledger, &[bout("A", "B", Outcome::DrawOrOther)]);
        assert_eq!(rows[0].wins, 0);
        assert_eq!(rows[1].wins, 0);
        assert_eq!(rows[0].bouts, 1);
    }

    #[test]
    fn test_standings_order_is_stable_across_runs() {
        let mut ledger = GlobalLedger::new(1500.0);
        // Equal ratings force the name tie-break
        for name in ["C", "A", "B"] {
            ledger.update(name, 1500.0, true);
        }

        let first = build_standings(&ledger, &[]);
        let second = build_standings(&ledger, &[]);
        let names: Vec<&str> = first.iter().map(|r| r.fighter.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(
            names,
            second.iter().map(|r| r.fighter.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_division_standings_grouped_and_sorted() {
        let mut ledger = DivisionLedger::new(1500.0);
        ledger.update("A", "Lightweight", 1520.0, true);
        ledger.update("B", "Lightweight", 1550.0, true);
        ledger.update("C", "Flyweight", 1480.0, true);

        let rows = build_division_standings(&ledger);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].division, "Flyweight");
        assert_eq!(rows[1].fighter, "B");
        assert_eq!(rows[2].fighter, "A");
    }
}
