//! Coaching job-market offer generation.
//!
//! A coach's career record is condensed into a single score; each open
//! job pursues the coach when that score clears the job's prestige
//! demand (minus a fixed reach allowance), and the pursuing jobs
//! generate salary/term offers.

use serde::{Deserialize, Serialize};

use super::types::TeamContext;
use crate::storage::models::CoachRecord;

/// How far below its prestige demand a program will still reach.
const REACH_ALLOWANCE: f64 = 0.15;

/// An open coaching job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpening {
    pub team: TeamContext,
    /// Salary budgeted for the position, in dollars per year.
    pub base_salary: u64,
}

/// A generated offer from one opening.
#[derive(Debug, Clone, Serialize)]
pub struct JobOffer {
    pub team: String,
    /// Offered salary in dollars per year.
    pub salary: u64,
    /// Contract length in years (3-7).
    pub years: u8,
    /// How eager the program is, in [0, 1].
    pub interest: f64,
    pub reasoning: String,
}

/// Condense a coach's record into a score in [0, 1].
///
/// Win percentage carries half the weight; tournament trips and tenure
/// make up the rest. The experience factor approaches 1.0 asymptotically
/// so one good season doesn't read as a career.
pub fn coach_score(record: &CoachRecord) -> f64 {
    if record.seasons == 0 {
        return 0.0;
    }

    let games = record.wins + record.losses;
    let win_pct = if games == 0 {
        0.0
    } else {
        record.wins as f64 / games as f64
    };

    let tourney_rate =
        (record.tournament_appearances as f64 / record.seasons as f64).clamp(0.0, 1.0);
    let experience = record.seasons as f64 / (record.seasons as f64 + 5.0);

    (0.5 * win_pct + 0.3 * tourney_rate + 0.2 * experience).clamp(0.0, 1.0)
}

/// Generate offers for every opening that would pursue the coach.
///
/// A coach with no recorded seasons draws no offers. Offers come back
/// sorted by salary, best first.
pub fn generate_offers(record: &CoachRecord, openings: &[JobOpening]) -> Vec<JobOffer> {
    if record.seasons == 0 {
        return Vec::new();
    }

    let score = coach_score(record);

    let mut offers: Vec<JobOffer> = openings
        .iter()
        .filter_map(|opening| {
            let demand = opening.team.prestige as f64 / 100.0;
            if score < demand - REACH_ALLOWANCE {
                return None;
            }

            let interest = (score + REACH_ALLOWANCE - demand).clamp(0.0, 1.0);
            let salary = round_to_thousand(opening.base_salary as f64 * (0.75 + score));
            let years = 3 + (score * 4.0).floor() as u8;

            let reasoning = if score >= demand {
                format!(
                    "{} sees a proven fit ({:.0}% career score vs {:.0}% prestige demand)",
                    opening.team.name,
                    score * 100.0,
                    demand * 100.0,
                )
            } else {
                format!(
                    "{} is reaching below its usual profile ({:.0}% career score vs {:.0}% prestige demand)",
                    opening.team.name,
                    score * 100.0,
                    demand * 100.0,
                )
            };

            Some(JobOffer {
                team: opening.team.name.clone(),
                salary,
                years: years.min(7),
                interest,
                reasoning,
            })
        })
        .collect();

    offers.sort_by(|a, b| b.salary.cmp(&a.salary));
    offers
}

fn round_to_thousand(dollars: f64) -> u64 {
    ((dollars / 1000.0).round() * 1000.0).max(0.0) as u64
}
