//! CLI argument definitions and parsing structures.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::types::{class::ClassYear, filters::RolePromise, position::Position, time::Season};

/// Common filtering arguments shared between roster commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// Filter by player name (substring match) - repeatable: `-n Smith -n Jones`.
    #[clap(long, short = 'n')]
    pub player_name: Option<Vec<String>>,

    /// Filter by position (repeatable): `-p PG -p SG`.
    #[clap(short = 'p', long = "position", value_parser = clap::value_parser!(Position))]
    pub positions: Option<Vec<Position>>,

    /// Filter by class year (fr, so, jr, sr).
    #[clap(long, value_parser = clap::value_parser!(ClassYear))]
    pub class: Option<ClassYear>,

    /// Season year used for salary and draft lookups (e.g. 2026).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Keep only the top N rows of output.
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Parser)]
#[clap(name = "cbb-nil", about = "College basketball NIL valuation CLI")]
pub struct CbbNil {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute NIL valuations for a roster of players.
    ///
    /// Reads player profiles and a team context from JSON files, blends the
    /// weighted component scores, and prints one valuation per player.
    Value {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Roster JSON file (array of player profiles).
        #[clap(long)]
        players: PathBuf,

        /// Team context JSON file.
        #[clap(long)]
        team: PathBuf,

        /// Skip NBA-comparable hype lookups (no reference database needed).
        #[clap(long)]
        no_comps: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compute a program's NIL budget cap and soft-cap taxation.
    Budget {
        /// Team context JSON file.
        #[clap(long)]
        team: PathBuf,

        /// NIL spend to evaluate against the cap (defaults to the team's
        /// current spend from the context file).
        #[clap(long)]
        spend: Option<u64>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Evaluate a single NIL offer against a player's asking price.
    ///
    /// The player's asking price comes from their valuation shaped by
    /// personality; the offer is accepted iff it clears the threshold.
    Negotiate {
        /// Roster JSON file (array of player profiles).
        #[clap(long)]
        players: PathBuf,

        /// Team context JSON file for the offering program.
        #[clap(long)]
        team: PathBuf,

        /// Name of the player receiving the offer.
        #[clap(long)]
        player: String,

        /// Offer amount in dollars.
        #[clap(long)]
        offer: u64,

        /// Role promised alongside the money.
        #[clap(long, value_enum, default_value = "rotation")]
        role: RolePromise,

        /// Number of competing offers the player holds.
        #[clap(long, default_value_t = 0)]
        competing: u8,

        /// Season year used for comparable hype lookups.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Skip NBA-comparable hype lookups (no reference database needed).
        #[clap(long)]
        no_comps: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Find NBA statistical comparables for college players.
    Comps {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Roster JSON file (array of player profiles).
        #[clap(long)]
        players: PathBuf,

        /// Number of comparables to report per player.
        #[clap(long, default_value_t = 3)]
        top: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Generate job-market offers for a coach from a set of open jobs.
    JobMarket {
        /// Coach name, looked up in the ingested coach records.
        #[clap(long)]
        coach: String,

        /// JSON file describing the open jobs.
        #[clap(long)]
        openings: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Build the reference lookup tables from local data files.
    Ingest {
        #[clap(subcommand)]
        cmd: IngestCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum IngestCmd {
    /// Load an NBA salary table from a CSV export.
    Salaries {
        /// CSV file with player and salary columns.
        file: PathBuf,

        /// Season the salaries apply to.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Clear the table before loading.
        #[clap(long)]
        clear: bool,
    },

    /// Load NBA draft history from a CSV export.
    Draft {
        /// CSV file with year, round, pick, player, college columns.
        file: PathBuf,

        /// Clear the table before loading.
        #[clap(long)]
        clear: bool,
    },

    /// Load coach career records from a CSV export.
    Coaches {
        /// CSV file with name, school, seasons, wins, losses columns.
        file: PathBuf,

        /// Clear the table before loading.
        #[clap(long)]
        clear: bool,
    },

    /// Load NBA roster stat lines from a JSON export.
    Rosters {
        /// JSON file (array of roster entries).
        file: PathBuf,

        /// Clear the table before loading.
        #[clap(long)]
        clear: bool,
    },
}
