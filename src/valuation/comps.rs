//! NBA-comparable matching.
//!
//! A college player's stat profile is matched against the ingested NBA
//! reference pool by weighted distance over normalized axes. The best
//! comparable's salary percentile feeds the hype multiplier used by the
//! NIL formula.

use rayon::prelude::*;
use serde::Serialize;

use super::types::PlayerProfile;
use crate::storage::models::{CompCandidate, DraftPick};

/// Hype can inflate a valuation by at most this fraction.
const HYPE_SPAN: f64 = 0.35;

// Axis weights and the spread that maps a difference to 1.0.
const PPG_WEIGHT: f64 = 0.35;
const PPG_SCALE: f64 = 30.0;
const RPG_WEIGHT: f64 = 0.25;
const RPG_SCALE: f64 = 15.0;
const APG_WEIGHT: f64 = 0.25;
const APG_SCALE: f64 = 10.0;
const HEIGHT_WEIGHT: f64 = 0.15;
const HEIGHT_SCALE: f64 = 8.0;

/// One NBA comparable for a college player.
#[derive(Debug, Clone, Serialize)]
pub struct ComparableMatch {
    pub name: String,
    pub team: Option<String>,
    /// Similarity in (0, 1]; 1.0 is an identical profile.
    pub similarity: f64,
    pub salary: Option<u64>,
    pub draft: Option<DraftPick>,
}

/// Rank the candidate pool by similarity and keep the top `k`.
///
/// The pool is scored in parallel; an empty pool yields an empty result.
pub fn find_comparables(
    player: &PlayerProfile,
    pool: &[CompCandidate],
    k: usize,
) -> Vec<ComparableMatch> {
    let mut matches: Vec<ComparableMatch> = pool
        .par_iter()
        .map(|candidate| ComparableMatch {
            name: candidate.player.name.clone(),
            team: candidate.player.team.clone(),
            similarity: similarity(player, candidate),
            salary: candidate.salary,
            draft: candidate.draft.clone(),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(k);
    matches
}

/// Hype multiplier from the best comparable's salary percentile.
///
/// `None` (no comparable, or no salary data) is neutral. Always within
/// [1.0, 1.0 + HYPE_SPAN].
pub fn hype_multiplier(salary_percentile: Option<f64>) -> f64 {
    match salary_percentile {
        Some(pct) => 1.0 + HYPE_SPAN * pct.clamp(0.0, 1.0),
        None => 1.0,
    }
}

/// Weighted profile similarity in (0, 1].
///
/// The height axis drops out (with weights renormalized) when either
/// side is missing a height.
fn similarity(player: &PlayerProfile, candidate: &CompCandidate) -> f64 {
    let stats = &player.stats;
    let nba = &candidate.player;

    let mut weighted = 0.0;
    let mut weight_sum = 0.0;

    let mut axis = |weight: f64, diff: f64, scale: f64| {
        let d = diff / scale;
        weighted += weight * d * d;
        weight_sum += weight;
    };

    axis(PPG_WEIGHT, stats.points - nba.ppg, PPG_SCALE);
    axis(RPG_WEIGHT, stats.rebounds - nba.rpg, RPG_SCALE);
    axis(APG_WEIGHT, stats.assists - nba.apg, APG_SCALE);

    if let (Some(a), Some(b)) = (player.height_in, nba.height_in) {
        axis(HEIGHT_WEIGHT, a as f64 - b as f64, HEIGHT_SCALE);
    }

    let distance = (weighted / weight_sum).sqrt();
    1.0 / (1.0 + distance)
}
