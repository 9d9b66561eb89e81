//! NBA roster ingestion from JSON exports.

use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;

use super::IngestSummary;
use crate::cli::types::PlayerId;
use crate::core::normalize::normalize_name;
use crate::error::Result;
use crate::storage::{LookupDatabase, NbaPlayer};

/// One entry of a roster JSON export.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub player_id: u64,
    pub name: String,
    pub position: String,
    /// Feet-inches ("6-7") or plain inches ("79").
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub ppg: f64,
    #[serde(default)]
    pub rpg: f64,
    #[serde(default)]
    pub apg: f64,
    #[serde(default)]
    pub team: Option<String>,
}

/// Load a roster JSON export into `nba_players`.
pub fn ingest_rosters(db: &mut LookupDatabase, path: &Path) -> Result<IngestSummary> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&text)?;
    let total = entries.len();

    let players: Vec<NbaPlayer> = entries
        .par_iter()
        .filter_map(|entry| {
            let name = entry.name.trim();
            if name.is_empty() || entry.position.trim().is_empty() {
                return None;
            }
            Some(NbaPlayer {
                player_id: PlayerId::new(entry.player_id),
                name: name.to_string(),
                normalized_name: normalize_name(name),
                position: entry.position.trim().to_uppercase(),
                height_in: entry.height.as_deref().and_then(parse_height_inches),
                ppg: entry.ppg,
                rpg: entry.rpg,
                apg: entry.apg,
                team: entry.team.clone(),
            })
        })
        .collect();

    let skipped = total - players.len();
    let inserted = db.bulk_upsert_nba_players(&players)?;

    Ok(IngestSummary { inserted, skipped })
}

/// Parse a roster height: "6-7" (feet-inches) or "79" (inches).
pub(crate) fn parse_height_inches(s: &str) -> Option<u16> {
    let s = s.trim();
    if let Some((feet, inches)) = s.split_once('-') {
        let feet: u16 = feet.trim().parse().ok()?;
        let inches: u16 = inches.trim().parse().ok()?;
        if inches >= 12 {
            return None;
        }
        return Some(feet * 12 + inches);
    }
    s.parse().ok()
}
