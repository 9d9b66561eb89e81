//! Job-market offer generation for a coach.

use std::path::Path;

use serde::Serialize;

use crate::{
    error::NilError,
    storage::{models::CoachRecord, LookupDatabase},
    valuation::jobs::{coach_score, generate_offers, JobOffer},
    Result,
};

use super::common::{format_dollars, load_openings};

/// Full payload for JSON output.
#[derive(Debug, Serialize)]
struct JobMarketReport {
    coach: CoachRecord,
    score: f64,
    offers: Vec<JobOffer>,
}

/// Generate and print job offers for a coach from the open jobs file.
pub fn handle_job_market(coach_name: &str, openings_path: &Path, as_json: bool) -> Result<()> {
    let db = LookupDatabase::new()?;
    let record = db
        .get_coach(coach_name)?
        .ok_or_else(|| NilError::CoachNotFound {
            name: coach_name.to_string(),
        })?;

    let openings = load_openings(openings_path)?;
    let offers = generate_offers(&record, &openings);
    let score = coach_score(&record);

    if as_json {
        let report = JobMarketReport {
            coach: record,
            score,
            offers,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "✓ {} ({}-{}, {} season{}, {} NCAA trip{}) | career score {:.2}",
        record.name,
        record.wins,
        record.losses,
        record.seasons,
        if record.seasons == 1 { "" } else { "s" },
        record.tournament_appearances,
        if record.tournament_appearances == 1 { "" } else { "s" },
        score,
    );

    if offers.is_empty() {
        println!("  No program is calling ({} openings reviewed)", openings.len());
        return Ok(());
    }

    for offer in &offers {
        println!(
            "  {}: {}/yr x {} years (interest {:.2})",
            offer.team,
            format_dollars(offer.salary),
            offer.years,
            offer.interest,
        );
        println!("    {}", offer.reasoning);
    }

    Ok(())
}
