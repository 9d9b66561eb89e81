//! The NIL valuation formula.
//!
//! A player's value blends four component scores (performance, market,
//! draft projection, social reach), maps the blend onto a dollar range
//! with a convex curve, then applies the sponsor-tier and
//! NBA-comparable-hype multipliers. The result is always inside
//! [`VALUE_FLOOR`, `VALUE_CEILING`].

use serde::Serialize;

use super::types::{DraftProjection, PlayerProfile, SeasonLine, TeamContext};
use crate::cli::types::{ClassYear, PlayerId, Position};

#[cfg(test)]
mod tests;

/// Smallest NIL value the formula can produce, in dollars.
pub const VALUE_FLOOR: u64 = 5_000;
/// Largest NIL value the formula can produce, in dollars.
pub const VALUE_CEILING: u64 = 4_000_000;

const PERFORMANCE_WEIGHT: f64 = 0.40;
const MARKET_WEIGHT: f64 = 0.25;
const DRAFT_WEIGHT: f64 = 0.20;
const SOCIAL_WEIGHT: f64 = 0.15;

/// Convexity of the score-to-dollars mapping; stars earn disproportionately.
const SCORE_EXPONENT: f64 = 1.6;
/// Production index that maps to a perfect performance score.
const PRODUCTION_SCALE: f64 = 40.0;
/// Minutes per game treated as a full workload.
const FULL_WORKLOAD_MPG: f64 = 32.0;
/// log10(followers) that maps to a perfect social score.
const SOCIAL_LOG_SCALE: f64 = 7.0;

/// Component scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub performance: f64,
    pub market: f64,
    pub draft: f64,
    pub social: f64,
}

/// A player's NIL valuation with its full breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct NilValuation {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub class: ClassYear,
    /// Final dollar value, clamped to [VALUE_FLOOR, VALUE_CEILING].
    pub value: u64,
    /// Weighted blend of the component scores, in [0, 1].
    pub composite: f64,
    pub components: ComponentScores,
    pub sponsor_multiplier: f64,
    pub comp_hype: f64,
}

/// On-court production score in [0, 1].
///
/// Zero games played scores zero: a player with no resume gets the
/// valuation floor regardless of rating.
pub fn performance_score(line: &SeasonLine) -> f64 {
    if line.games == 0 {
        return 0.0;
    }

    let production = line.points + 1.2 * line.rebounds + 1.5 * line.assists
        + 2.0 * line.steals
        + 2.0 * line.blocks
        - 1.2 * line.turnovers;

    let workload = (line.minutes / FULL_WORKLOAD_MPG).clamp(0.0, 1.0);
    let raw = (production / PRODUCTION_SCALE).clamp(0.0, 1.0);

    (raw * (0.7 + 0.3 * workload)).clamp(0.0, 1.0)
}

/// Program market score in [0, 1]: media market blended with prestige.
pub fn market_score(team: &TeamContext) -> f64 {
    0.6 * team.market_size.score() + 0.4 * (team.prestige as f64 / 100.0)
}

/// Draft-projection score in [0, 1]. Unprojected players keep a sliver.
pub fn draft_score(projection: Option<DraftProjection>) -> f64 {
    match projection {
        Some(DraftProjection::Lottery) => 1.0,
        Some(DraftProjection::FirstRound) => 0.8,
        Some(DraftProjection::SecondRound) => 0.5,
        Some(DraftProjection::Undrafted) => 0.2,
        None => 0.1,
    }
}

/// Social-reach score in [0, 1], logarithmic in follower count.
pub fn social_score(followers: u64) -> f64 {
    if followers == 0 {
        return 0.0;
    }
    ((followers as f64).log10() / SOCIAL_LOG_SCALE).clamp(0.0, 1.0)
}

/// Compute a player's NIL valuation.
///
/// `comp_hype` is the NBA-comparable hype multiplier from
/// [`crate::valuation::comps::hype_multiplier`]; pass 1.0 when no
/// reference data is available.
pub fn evaluate(player: &PlayerProfile, team: &TeamContext, comp_hype: f64) -> NilValuation {
    let components = ComponentScores {
        performance: performance_score(&player.stats),
        market: market_score(team),
        draft: draft_score(player.draft_projection),
        social: social_score(player.followers),
    };

    let composite = PERFORMANCE_WEIGHT * components.performance
        + MARKET_WEIGHT * components.market
        + DRAFT_WEIGHT * components.draft
        + SOCIAL_WEIGHT * components.social;

    let span = (VALUE_CEILING - VALUE_FLOOR) as f64;
    let base = VALUE_FLOOR as f64 + composite.powf(SCORE_EXPONENT) * span;

    let sponsor_multiplier = player.sponsor.multiplier();
    let dollars = base * sponsor_multiplier * comp_hype;

    let value = round_to_hundred(dollars).clamp(VALUE_FLOOR, VALUE_CEILING);

    NilValuation {
        player_id: player.player_id,
        name: player.name.clone(),
        position: player.position,
        class: player.class,
        value,
        composite,
        components,
        sponsor_multiplier,
        comp_hype,
    }
}

/// Round a dollar figure to the nearest $100.
fn round_to_hundred(dollars: f64) -> u64 {
    ((dollars / 100.0).round() * 100.0).max(0.0) as u64
}
