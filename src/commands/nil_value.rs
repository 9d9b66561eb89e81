//! NIL valuation for a roster of players.
//!
//! Loads player profiles and a team context from JSON, looks up
//! NBA-comparable hype against the reference database (unless told not
//! to), and prints one valuation per player, best first.

use std::path::PathBuf;

use crate::{
    cli::types::{ClassYear, Position, Season},
    storage::LookupDatabase,
    valuation::nil::{evaluate, NilValuation},
    Result,
};

use super::common::{apply_roster_filters, comp_context, format_dollars, load_players, load_team};

/// Configuration parameters for the `value` command.
#[derive(Debug)]
pub struct NilValueParams {
    pub players_path: PathBuf,
    pub team_path: PathBuf,
    pub player_name: Option<Vec<String>>,
    pub positions: Option<Vec<Position>>,
    pub class: Option<ClassYear>,
    pub season: Season,
    pub limit: Option<usize>,
    pub no_comps: bool,
    pub as_json: bool,
}

/// Compute and print NIL valuations for a roster.
pub fn handle_nil_value(params: NilValueParams) -> Result<()> {
    let players = load_players(&params.players_path)?;
    let team = load_team(&params.team_path)?;

    let players = apply_roster_filters(
        players,
        params.player_name.as_ref(),
        params.positions.as_ref(),
        params.class,
    );

    let db = if params.no_comps {
        None
    } else {
        Some(LookupDatabase::new()?)
    };

    let mut valuations: Vec<NilValuation> = Vec::with_capacity(players.len());
    for player in &players {
        let hype = match &db {
            Some(db) => comp_context(db, player, params.season, 1)?.hype,
            None => 1.0,
        };
        valuations.push(evaluate(player, &team, hype));
    }

    // Sort descending by value
    valuations.sort_by(|a, b| b.value.cmp(&a.value));
    if let Some(limit) = params.limit {
        valuations.truncate(limit);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&valuations)?);
    } else {
        println!(
            "✓ {} valuation{} for {}",
            valuations.len(),
            if valuations.len() == 1 { "" } else { "s" },
            team.name
        );
        for v in &valuations {
            println!(
                "{} {} ({}, {}) {}  [perf {:.2} mkt {:.2} drf {:.2} soc {:.2}] x{:.2} hype",
                v.player_id,
                v.name,
                v.position,
                v.class,
                format_dollars(v.value),
                v.components.performance,
                v.components.market,
                v.components.draft,
                v.components.social,
                v.comp_hype,
            );
        }
    }

    Ok(())
}
