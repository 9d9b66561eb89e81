//! Single-offer negotiation.
//!
//! Computes the target player's valuation (with comparable hype when the
//! reference database is available), then runs the accept/reject
//! threshold check against the offer terms.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cli::types::{RolePromise, Season},
    storage::LookupDatabase,
    valuation::{
        negotiation::{evaluate_offer, OfferOutcome, OfferTerms},
        nil::{evaluate, NilValuation},
    },
    Result,
};

use super::common::{comp_context, find_player, format_dollars, load_players, load_team};

/// Configuration parameters for the `negotiate` command.
#[derive(Debug)]
pub struct NegotiateParams {
    pub players_path: PathBuf,
    pub team_path: PathBuf,
    pub player: String,
    pub offer: u64,
    pub role: RolePromise,
    pub competing: u8,
    pub season: Season,
    pub no_comps: bool,
    pub as_json: bool,
}

/// JSON payload combining the valuation the ask was built from and the
/// negotiation outcome.
#[derive(Debug, Serialize)]
struct NegotiationReport {
    valuation: NilValuation,
    outcome: OfferOutcome,
}

/// Evaluate one NIL offer and print the outcome.
pub fn handle_negotiate(params: NegotiateParams) -> Result<()> {
    let players = load_players(&params.players_path)?;
    let team = load_team(&params.team_path)?;
    let player = find_player(&players, &params.player)?;

    let hype = if params.no_comps {
        1.0
    } else {
        let db = LookupDatabase::new()?;
        comp_context(&db, player, params.season, 1)?.hype
    };

    let valuation = evaluate(player, &team, hype);
    let terms = OfferTerms {
        amount: params.offer,
        role: params.role,
        competing_offers: params.competing,
    };
    let outcome = evaluate_offer(player, &team, valuation.value, &terms);

    if params.as_json {
        let report = NegotiationReport { valuation, outcome };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let verdict = if outcome.accepted {
            "ACCEPTED"
        } else {
            "REJECTED"
        };
        println!(
            "✓ {}: {} offer of {} ({} role, {} competing)",
            outcome.player,
            verdict,
            format_dollars(params.offer),
            params.role,
            params.competing,
        );
        println!(
            "  Valuation {} | asking {} | threshold {}",
            format_dollars(valuation.value),
            format_dollars(outcome.asking_price),
            format_dollars(outcome.threshold),
        );
        println!("  {}", outcome.reasoning);
        if let Some(counter) = outcome.counter {
            println!("  Counter: {}", format_dollars(counter));
        }
    }

    Ok(())
}
