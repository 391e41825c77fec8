//! Integration tests for the cagerank rating pipeline
//!
//! These tests validate the whole system working together, including:
//! - Dataset loading, normalization, and chronological sorting
//! - The promotion-wide and per-division rating folds
//! - Standings assembly and table export
//! - Determinism of repeated runs

// Modules for organizing tests
mod fixtures;

use cagerank::config::EloConfig;
use cagerank::dataset;
use cagerank::rating::elo::expected_score;
use cagerank::rating::{DivisionProcessor, GlobalProcessor};
use cagerank::report;

use fixtures::{cleanup, temp_path, write_dataset};

#[test]
fn test_complete_promotion_wide_workflow() {
    let input = write_dataset(
        "global.csv",
        &[
            "01-01-23,Ada,Bea,Red,SUB,Lightweight",
            "08-01-23,Cara,Dee,Blue,U-DEC,Lightweight",
            "15-01-23,Ada,Cara,Red,KO/TKO,Lightweight",
        ],
    );

    let bouts = dataset::load_bouts(&[&input]).unwrap();
    assert_eq!(bouts.len(), 3);

    let mut processor = GlobalProcessor::new(EloConfig::default()).unwrap();
    processor.process_all(&bouts);
    let (ledger, history) = processor.into_parts();

    // Two snapshots per bout, red corner first, post-bout state
    assert_eq!(history.len(), 6);
    assert_eq!(history[0].fighter, "Ada");
    assert!((history[0].rating - 1538.4).abs() < 1e-9);
    assert_eq!(history[1].fighter, "Bea");
    assert!((history[1].rating - 1461.6).abs() < 1e-9);

    let standings = report::build_standings(&ledger, &bouts);
    assert_eq!(standings.len(), 4);
    assert_eq!(standings[0].fighter, "Ada");
    assert_eq!(standings[0].bouts, 2);
    assert_eq!(standings[0].wins, 2);
    assert_eq!(standings[0].win_ratio, 1.0);

    let standings_path = temp_path("global-standings.csv");
    let history_path = temp_path("global-history.csv");
    dataset::write_table(&standings_path, &standings).unwrap();
    dataset::write_table(&history_path, &history).unwrap();

    let standings_csv = std::fs::read_to_string(&standings_path).unwrap();
    assert!(standings_csv.starts_with("fighter_name,elo,fights,wins,win_ratio"));
    assert_eq!(standings_csv.lines().count(), 5);

    let history_csv = std::fs::read_to_string(&history_path).unwrap();
    assert!(history_csv.starts_with("date,fighter,elo,fight_count"));
    assert!(history_csv.contains("2023-01-01,Ada,1538.4,1"));

    cleanup(&[input, standings_path, history_path]);
}

#[test]
fn test_complete_per_division_workflow() {
    let input = write_dataset(
        "division.csv",
        &[
            "01-01-23,Ada,Bea,Red,SUB,Lightweight",
            "08-01-23,Ada,Cara,Red,KO/TKO,Welterweight",
            "15-01-23,Dee,Eve,Red,U-DEC,",
        ],
    );

    let bouts = dataset::load_bouts(&[&input]).unwrap();
    let mut processor = DivisionProcessor::new(EloConfig::default()).unwrap();
    processor.process_all(&bouts);

    // The unlabeled bout is not rated
    assert_eq!(processor.skipped(), 1);

    let (ledger, history) = processor.into_parts();

    // Fixed K of 32 in the first bout: +16 for the winner
    let lightweight = ledger.get("Ada", "Lightweight").unwrap();
    assert!((lightweight.rating - 1516.0).abs() < 1e-9);

    // Ada's welterweight debut starts from her lightweight rating, and the
    // finish method plays no part in the division variant.
    let expected = expected_score(1516.0, 1500.0, 400.0);
    let welterweight = ledger.get("Ada", "Welterweight").unwrap();
    assert!((welterweight.rating - (1516.0 + 32.0 * (1.0 - expected))).abs() < 1e-9);
    assert_eq!(welterweight.bouts, 1);

    assert_eq!(history.len(), 4);
    assert_eq!(history[2].division, "Welterweight");

    let standings = report::build_division_standings(&ledger);
    assert_eq!(standings.len(), 4);
    // Grouped by division name, Lightweight before Welterweight
    assert_eq!(standings[0].division, "Lightweight");
    assert_eq!(standings[3].division, "Welterweight");

    let standings_path = temp_path("division-standings.csv");
    dataset::write_table(&standings_path, &standings).unwrap();
    let standings_csv = std::fs::read_to_string(&standings_path).unwrap();
    assert!(standings_csv.starts_with("fighter_name,division,elo,fights"));

    cleanup(&[input, standings_path]);
}

#[test]
fn test_loader_orders_bouts_before_the_fold() {
    let rows_ordered = [
        "01-01-23,Ada,Bea,Red,KO/TKO,Lightweight",
        "08-01-23,Bea,Cara,Blue,SUB,Lightweight",
        "15-01-23,Ada,Cara,Draw,S-DEC,Lightweight",
    ];
    let rows_shuffled = [rows_ordered[2], rows_ordered[0], rows_ordered[1]];

    let ordered = write_dataset("ordered.csv", &rows_ordered);
    let shuffled = write_dataset("shuffled.csv", &rows_shuffled);

    let run = |path: &std::path::PathBuf| {
        let bouts = dataset::load_bouts(&[path]).unwrap();
        let mut processor = GlobalProcessor::new(EloConfig::default()).unwrap();
        processor.process_all(&bouts);
        let (ledger, _) = processor.into_parts();
        ["Ada", "Bea", "Cara"]
            .iter()
            .map(|name| ledger.get(name).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(&ordered), run(&shuffled));

    cleanup(&[ordered, shuffled]);
}

#[test]
fn test_repeated_runs_write_identical_tables() {
    let input = write_dataset(
        "determinism.csv",
        &[
            "01-01-23,Ada,Bea,Red,SUB,Lightweight",
            "01-01-23,Cara,Dee,Blue,M-DEC,Featherweight",
            "08-01-23,Ada,Cara,Draw,DQ,Lightweight",
            "15-01-23,Bea,Dee,Red,Overturned,Featherweight",
            "22-01-23,Eve,Ada,Blue,U-DEC,Lightweight",
        ],
    );

    let render = |tag: &str| {
        let bouts = dataset::load_bouts(&[&input]).unwrap();
        let mut processor = GlobalProcessor::new(EloConfig::default()).unwrap();
        processor.process_all(&bouts);
        let (ledger, history) = processor.into_parts();
        let standings = report::build_standings(&ledger, &bouts);

        let standings_path = temp_path(&format!("det-standings-{}.csv", tag));
        let history_path = temp_path(&format!("det-history-{}.csv", tag));
        dataset::write_table(&standings_path, &standings).unwrap();
        dataset::write_table(&history_path, &history).unwrap();

        let rendered = (
            std::fs::read_to_string(&standings_path).unwrap(),
            std::fs::read_to_string(&history_path).unwrap(),
        );
        cleanup(&[standings_path, history_path]);
        rendered
    };

    assert_eq!(render("one"), render("two"));

    cleanup(&[input]);
}
