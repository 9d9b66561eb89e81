//! Domain model: player profiles, team contexts, and the enums that
//! shape the valuation formulas.
//!
//! These records are constructed once per season/week tick by the calling
//! simulation (or read from JSON input files by the CLI) and treated as
//! read-only by the valuation functions.

use serde::{Deserialize, Serialize};

use crate::cli::types::{ClassYear, PlayerId, Position, TeamId};

/// Per-game stat line for one college season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonLine {
    /// Games played; zero means no on-court resume yet.
    pub games: u16,
    /// Minutes per game.
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    /// Shooting splits as fractions in [0, 1].
    #[serde(default)]
    pub fg_pct: f64,
    #[serde(default)]
    pub three_pct: f64,
    #[serde(default)]
    pub ft_pct: f64,
}

impl SeasonLine {
    /// An empty stat line (zero games).
    pub fn empty() -> Self {
        Self {
            games: 0,
            minutes: 0.0,
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
            fg_pct: 0.0,
            three_pct: 0.0,
            ft_pct: 0.0,
        }
    }
}

/// Personality traits, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// Attachment to the current program; discounts the asking price
    /// for the incumbent team.
    pub loyalty: f64,
    /// Appetite for money; inflates the asking price.
    pub greed: f64,
    /// Self-image; punishes offers below the expected role.
    pub ego: f64,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            loyalty: 0.5,
            greed: 0.5,
            ego: 0.5,
        }
    }
}

/// Sponsor tier attached to a player's current NIL deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorTier {
    #[default]
    None,
    Local,
    Regional,
    National,
}

impl SponsorTier {
    /// Value multiplier applied to the base dollar figure.
    pub fn multiplier(&self) -> f64 {
        match self {
            SponsorTier::None => 1.0,
            SponsorTier::Local => 1.1,
            SponsorTier::Regional => 1.25,
            SponsorTier::National => 1.5,
        }
    }
}

/// Projected draft range for a college player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftProjection {
    Lottery,
    FirstRound,
    SecondRound,
    Undrafted,
}

/// A college player as seen by the valuation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub class: ClassYear,
    #[serde(default)]
    pub height_in: Option<u16>,
    pub stats: SeasonLine,
    /// Current ability, 0-100.
    pub overall: u8,
    /// Ceiling, 0-100.
    pub potential: u8,
    #[serde(default)]
    pub draft_projection: Option<DraftProjection>,
    /// Social-media reach.
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub sponsor: SponsorTier,
    /// Program the player currently plays for, if any.
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub personality: Personality,
}

/// Conference strength bucket for budget purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConferenceTier {
    Power,
    High,
    Mid,
    Low,
}

/// Media-market size of the program's home area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSize {
    Metro,
    Large,
    Mid,
    Small,
}

impl MarketSize {
    /// Base market score in [0, 1].
    pub fn score(&self) -> f64 {
        match self {
            MarketSize::Metro => 1.0,
            MarketSize::Large => 0.8,
            MarketSize::Mid => 0.55,
            MarketSize::Small => 0.35,
        }
    }
}

/// A program as seen by the valuation and budget formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamContext {
    pub team_id: TeamId,
    pub name: String,
    pub conference_tier: ConferenceTier,
    /// 0-100.
    pub prestige: u8,
    /// 0-100.
    pub wealth: u8,
    /// 0-100.
    pub booster_strength: u8,
    pub market_size: MarketSize,
    /// Current committed NIL spend in dollars.
    #[serde(default)]
    pub nil_spend: u64,
}
