//! Common types used throughout the rating pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifying name of a fighter
pub type FighterId = String;

/// Free-text weight-division label, compared by exact (trimmed) equality
pub type Division = String;

/// Result of a bout from the red corner's perspective
///
/// Winner labels that match neither corner land in `DrawOrOther`: genuine
/// draws, no contests, and malformed labels are deliberately not told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    RedWin,
    BlueWin,
    DrawOrOther,
}

impl Outcome {
    /// Derive an outcome from a raw winner label.
    ///
    /// The label is trimmed and matched case-insensitively against the two
    /// corner names; everything else is `DrawOrOther`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "red" => Outcome::RedWin,
            "blue" => Outcome::BlueWin,
            _ => Outcome::DrawOrOther,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::RedWin => write!(f, "red"),
            Outcome::BlueWin => write!(f, "blue"),
            Outcome::DrawOrOther => write!(f, "draw/other"),
        }
    }
}

/// How a bout ended
///
/// Parsed from the dataset's finish label by case-sensitive exact match;
/// a missing or unrecognized label is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishMethod {
    KoTko,
    Submission,
    UnanimousDecision,
    SplitDecision,
    MajorityDecision,
    Disqualification,
    Overturned,
    Other,
}

impl FinishMethod {
    /// Resolve an optional raw finish label to a method.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("KO/TKO") => FinishMethod::KoTko,
            Some("SUB") => FinishMethod::Submission,
            Some("U-DEC") => FinishMethod::UnanimousDecision,
            Some("S-DEC") => FinishMethod::SplitDecision,
            Some("M-DEC") => FinishMethod::MajorityDecision,
            Some("DQ") | Some("DQ/TKO") => FinishMethod::Disqualification,
            Some("Overturned") => FinishMethod::Overturned,
            _ => FinishMethod::Other,
        }
    }
}

impl std::fmt::Display for FinishMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FinishMethod::KoTko => "KO/TKO",
            FinishMethod::Submission => "submission",
            FinishMethod::UnanimousDecision => "unanimous decision",
            FinishMethod::SplitDecision => "split decision",
            FinishMethod::MajorityDecision => "majority decision",
            FinishMethod::Disqualification => "disqualification",
            FinishMethod::Overturned => "overturned",
            FinishMethod::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// One bout, normalized and ready for processing
///
/// Fields are already trimmed and the date parsed; the processor consumes
/// these strictly in ascending date order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bout {
    pub date: NaiveDate,
    pub red: FighterId,
    pub blue: FighterId,
    pub outcome: Outcome,
    pub method: FinishMethod,
    /// Absent when the dataset carries no weight-class column
    pub division: Option<Division>,
}

/// Post-bout rating snapshot for one fighter (promotion-wide variant)
///
/// Appended twice per bout, red corner first. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub date: NaiveDate,
    pub fighter: FighterId,
    #[serde(rename = "elo")]
    pub rating: f64,
    #[serde(rename = "fight_count")]
    pub bouts: u32,
}

/// Post-bout rating snapshot for one fighter within a division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionSnapshot {
    pub date: NaiveDate,
    pub fighter: FighterId,
    pub division: Division,
    #[serde(rename = "elo")]
    pub rating: f64,
    #[serde(rename = "fight_count")]
    pub bouts: u32,
}

/// Final standings row for one fighter (promotion-wide variant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRow {
    #[serde(rename = "fighter_name")]
    pub fighter: FighterId,
    #[serde(rename = "elo")]
    pub rating: f64,
    #[serde(rename = "fights")]
    pub bouts: u32,
    pub wins: u32,
    pub win_ratio: f64,
}

/// Final standings row for one (fighter, division) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionStandingsRow {
    #[serde(rename = "fighter_name")]
    pub fighter: FighterId,
    pub division: Division,
    #[serde(rename = "elo")]
    pub rating: f64,
    #[serde(rename = "fights")]
    pub bouts: u32,
}
