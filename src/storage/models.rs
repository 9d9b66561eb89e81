//! Data models for the storage layer

use serde::{Deserialize, Serialize};

use crate::cli::types::{CoachId, PlayerId, Season};

/// NBA reference player stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbaPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub normalized_name: String,
    /// NBA roster label ("PG", "G-F", ...), looser than the college 1-5.
    pub position: String,
    pub height_in: Option<u16>,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub team: Option<String>,
}

/// One season of an NBA player's salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRow {
    pub normalized_name: String,
    pub season: Season,
    pub salary: u64,
}

/// One pick of NBA draft history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub year: u16,
    pub round: u8,
    pub pick: u8,
    pub normalized_name: String,
    pub college: Option<String>,
}

/// Coach career totals as parsed from an ingest file (no database ID yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachCareer {
    pub name: String,
    pub school: Option<String>,
    pub seasons: u16,
    pub wins: u32,
    pub losses: u32,
    pub tournament_appearances: u16,
}

/// Career record for a college coach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRecord {
    pub coach_id: CoachId,
    pub name: String,
    pub normalized_name: String,
    pub school: Option<String>,
    pub seasons: u16,
    pub wins: u32,
    pub losses: u32,
    pub tournament_appearances: u16,
}

/// Mean, spread and extremes for one season's salary pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryPoolStats {
    pub count: u32,
    pub mean: f64,
    pub stdev: f64,
    pub min: u64,
    pub max: u64,
}

/// Comparable-candidate row joined across the reference tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompCandidate {
    pub player: NbaPlayer,
    pub salary: Option<u64>,
    pub draft: Option<DraftPick>,
}
