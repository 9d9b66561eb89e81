//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;

use cbb_nil::{
    cli::{CbbNil, Commands},
    commands::{
        comps::{handle_comps, CompsParams},
        ingest::handle_ingest,
        job_market::handle_job_market,
        negotiate::{handle_negotiate, NegotiateParams},
        nil_value::{handle_nil_value, NilValueParams},
        team_budget::handle_team_budget,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = CbbNil::parse();

    match app.command {
        Commands::Value {
            filters,
            players,
            team,
            no_comps,
            json,
        } => handle_nil_value(NilValueParams {
            players_path: players,
            team_path: team,
            player_name: filters.player_name,
            positions: filters.positions,
            class: filters.class,
            season: filters.season,
            limit: filters.limit,
            no_comps,
            as_json: json,
        })?,

        Commands::Budget { team, spend, json } => handle_team_budget(&team, spend, json)?,

        Commands::Negotiate {
            players,
            team,
            player,
            offer,
            role,
            competing,
            season,
            no_comps,
            json,
        } => handle_negotiate(NegotiateParams {
            players_path: players,
            team_path: team,
            player,
            offer,
            role,
            competing,
            season,
            no_comps,
            as_json: json,
        })?,

        Commands::Comps {
            filters,
            players,
            top,
            json,
        } => handle_comps(CompsParams {
            players_path: players,
            player_name: filters.player_name,
            positions: filters.positions,
            class: filters.class,
            season: filters.season,
            limit: filters.limit,
            top,
            as_json: json,
        })?,

        Commands::JobMarket {
            coach,
            openings,
            json,
        } => handle_job_market(&coach, &openings, json)?,

        Commands::Ingest { cmd } => handle_ingest(cmd)?,
    }

    Ok(())
}
