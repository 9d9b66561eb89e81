//! Common utilities and helper functions shared across commands.

use std::path::Path;

use crate::{
    cli::types::{ClassYear, Position, Season},
    core::normalize::normalize_name,
    error::{NilError, Result},
    storage::LookupDatabase,
    valuation::{
        comps::{find_comparables, hype_multiplier, ComparableMatch},
        jobs::JobOpening,
        types::{PlayerProfile, TeamContext},
    },
};

/// Read a roster JSON file (array of player profiles).
pub fn load_players(path: &Path) -> Result<Vec<PlayerProfile>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a team context JSON file.
pub fn load_team(path: &Path) -> Result<TeamContext> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a job-openings JSON file.
pub fn load_openings(path: &Path) -> Result<Vec<JobOpening>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Find one player by name: exact normalized match first, then a unique
/// substring match.
pub fn find_player<'a>(players: &'a [PlayerProfile], name: &str) -> Result<&'a PlayerProfile> {
    let needle = normalize_name(name);

    if let Some(p) = players
        .iter()
        .find(|p| normalize_name(&p.name) == needle)
    {
        return Ok(p);
    }

    players
        .iter()
        .find(|p| normalize_name(&p.name).contains(&needle))
        .ok_or_else(|| NilError::PlayerNotFound {
            name: name.to_string(),
        })
}

/// Apply the shared roster filters (name substrings, positions, class).
pub fn apply_roster_filters(
    mut players: Vec<PlayerProfile>,
    names: Option<&Vec<String>>,
    positions: Option<&Vec<Position>>,
    class: Option<ClassYear>,
) -> Vec<PlayerProfile> {
    if let Some(names) = names {
        if !names.is_empty() {
            let needles: Vec<String> = names.iter().map(|n| normalize_name(n)).collect();
            players.retain(|p| {
                let name = normalize_name(&p.name);
                needles.iter().any(|needle| name.contains(needle))
            });
        }
    }

    if let Some(positions) = positions {
        if !positions.is_empty() {
            players.retain(|p| positions.contains(&p.position));
        }
    }

    if let Some(class) = class {
        players.retain(|p| p.class == class);
    }

    players
}

/// A player's comparable matches plus the hype multiplier derived from
/// the best match's salary percentile.
pub struct CompContext {
    pub hype: f64,
    pub matches: Vec<ComparableMatch>,
}

/// Look up comparables for one player against the reference database.
pub fn comp_context(
    db: &LookupDatabase,
    player: &PlayerProfile,
    season: Season,
    top: usize,
) -> Result<CompContext> {
    let pool = db.comp_candidates(season, player.position)?;
    let matches = find_comparables(player, &pool, top);

    let percentile = match matches.first().and_then(|m| m.salary) {
        Some(salary) => db.salary_percentile(season, salary)?,
        None => None,
    };

    Ok(CompContext {
        hype: hype_multiplier(percentile),
        matches,
    })
}

/// Format a dollar amount with thousands separators for console output.
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}
