//! College Basketball NIL CLI Library
//!
//! The economic core of a college-basketball management sim: NIL player
//! valuation, program budget caps with soft-cap taxation, offer
//! negotiation, NBA-comparable matching, coaching job-market offers,
//! and the batch ingestion that builds the reference lookup tables.
//!
//! ## Features
//!
//! - **NIL Valuation**: Weighted performance/market/draft/social blend,
//!   convex dollar mapping, sponsor and comparable-hype multipliers
//! - **Budget Caps**: Conference-tier caps with 50%-efficiency spend
//!   above the soft cap
//! - **Negotiation**: Single-round threshold accept/reject shaped by
//!   personality, incumbency, and competing offers
//! - **NBA Comparables**: Profile-distance matching over an ingested
//!   reference pool, salary-percentile hype
//! - **Job Market**: Career-score offer generation for open jobs
//! - **Reference Tables**: SQLite lookup tables built from local CSV and
//!   JSON exports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cbb_nil::valuation::{nil, types::*};
//! use cbb_nil::{ClassYear, PlayerId, Position, TeamId};
//!
//! let player = PlayerProfile {
//!     player_id: PlayerId::new(1),
//!     name: "Example Guard".to_string(),
//!     position: Position::PG,
//!     class: ClassYear::Sophomore,
//!     height_in: Some(75),
//!     stats: SeasonLine::empty(),
//!     overall: 74,
//!     potential: 85,
//!     draft_projection: None,
//!     followers: 12_000,
//!     sponsor: SponsorTier::Local,
//!     team_id: Some(TeamId::new(7)),
//!     personality: Personality::default(),
//! };
//! let team = TeamContext {
//!     team_id: TeamId::new(7),
//!     name: "Western State".to_string(),
//!     conference_tier: ConferenceTier::High,
//!     prestige: 60,
//!     wealth: 55,
//!     booster_strength: 50,
//!     market_size: MarketSize::Mid,
//!     nil_spend: 0,
//! };
//!
//! let valuation = nil::evaluate(&player, &team, 1.0);
//! assert!(valuation.value >= nil::VALUE_FLOOR);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the reference database somewhere other than the user cache dir:
//! ```bash
//! export CBB_NIL_DATA_DIR=/path/to/data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod ingest;
pub mod storage;
pub mod valuation;

// Re-export commonly used types
pub use cli::types::{ClassYear, CoachId, PlayerId, Position, RolePromise, Season, TeamId};
pub use error::{NilError, Result};
pub use valuation::types::{PlayerProfile, TeamContext};

pub const DATA_DIR_ENV_VAR: &str = "CBB_NIL_DATA_DIR";
