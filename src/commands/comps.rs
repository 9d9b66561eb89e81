//! NBA comparables for college players.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cli::types::{ClassYear, Position, Season},
    storage::{models::SalaryPoolStats, LookupDatabase},
    valuation::comps::ComparableMatch,
    Result,
};

use super::common::{apply_roster_filters, comp_context, format_dollars, load_players};

/// Configuration parameters for the `comps` command.
#[derive(Debug)]
pub struct CompsParams {
    pub players_path: PathBuf,
    pub player_name: Option<Vec<String>>,
    pub positions: Option<Vec<Position>>,
    pub class: Option<ClassYear>,
    pub season: Season,
    pub limit: Option<usize>,
    pub top: usize,
    pub as_json: bool,
}

/// Comparables for one college player.
#[derive(Debug, Serialize)]
struct PlayerComps {
    player: String,
    position: Position,
    hype: f64,
    matches: Vec<ComparableMatch>,
}

/// Full payload for JSON output.
#[derive(Debug, Serialize)]
struct CompsReport {
    season: Season,
    salary_pool: Option<SalaryPoolStats>,
    players: Vec<PlayerComps>,
}

/// Find and print NBA comparables for each (filtered) roster player.
pub fn handle_comps(params: CompsParams) -> Result<()> {
    let players = load_players(&params.players_path)?;
    let mut players = apply_roster_filters(
        players,
        params.player_name.as_ref(),
        params.positions.as_ref(),
        params.class,
    );
    if let Some(limit) = params.limit {
        players.truncate(limit);
    }

    let db = LookupDatabase::new()?;
    let salary_pool = db.salary_pool_stats(params.season)?;

    let mut reports = Vec::with_capacity(players.len());
    for player in &players {
        let ctx = comp_context(&db, player, params.season, params.top)?;
        reports.push(PlayerComps {
            player: player.name.clone(),
            position: player.position,
            hype: ctx.hype,
            matches: ctx.matches,
        });
    }

    if params.as_json {
        let report = CompsReport {
            season: params.season,
            salary_pool,
            players: reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &salary_pool {
        Some(stats) => println!(
            "✓ Season {} salary pool: {} contracts, mean {}",
            params.season,
            stats.count,
            format_dollars(stats.mean as u64),
        ),
        None => println!("⚠ No salaries ingested for season {}", params.season),
    }

    for report in &reports {
        if report.matches.is_empty() {
            println!(
                "{} ({}): no comparables in the reference pool",
                report.player, report.position
            );
            continue;
        }

        println!(
            "{} ({}) | hype x{:.2}",
            report.player, report.position, report.hype
        );
        for (i, m) in report.matches.iter().enumerate() {
            let salary = m
                .salary
                .map(format_dollars)
                .unwrap_or_else(|| "no salary on file".to_string());
            let pedigree = m
                .draft
                .as_ref()
                .map(|d| format!(", pick {}.{:02} in {}", d.round, d.pick, d.year))
                .unwrap_or_default();
            println!(
                "  {}. {} (sim {:.2}, {}{})",
                i + 1,
                m.name,
                m.similarity,
                salary,
                pedigree,
            );
        }
    }

    Ok(())
}
