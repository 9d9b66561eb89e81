//! Program NIL budgets and soft-cap taxation.
//!
//! The cap is a conference-tier base scaled by program wealth, prestige
//! and booster strength. Spend above the cap still counts, but at 50%
//! efficiency (the "soft-cap tax").

use serde::Serialize;

use super::types::{ConferenceTier, TeamContext};

/// Smallest budget cap the formula can produce, in dollars.
pub const CAP_FLOOR: u64 = 50_000;
/// Largest budget cap the formula can produce, in dollars.
pub const CAP_CEILING: u64 = 20_000_000;

impl ConferenceTier {
    /// Base NIL budget for a median program in this tier.
    pub fn base_budget(&self) -> u64 {
        match self {
            ConferenceTier::Power => 2_500_000,
            ConferenceTier::High => 1_200_000,
            ConferenceTier::Mid => 500_000,
            ConferenceTier::Low => 150_000,
        }
    }
}

/// Budget summary for one program.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub team: String,
    /// Soft cap in dollars.
    pub cap: u64,
    /// Raw committed spend in dollars.
    pub spend: u64,
    /// Spend after soft-cap taxation.
    pub effective_spend: u64,
    /// Dollars lost to the soft-cap tax.
    pub tax: u64,
    pub over_cap: bool,
}

/// Compute a program's NIL budget cap.
///
/// Always within [`CAP_FLOOR`, `CAP_CEILING`], rounded to the nearest
/// $1,000.
pub fn budget_cap(team: &TeamContext) -> u64 {
    let base = team.conference_tier.base_budget() as f64;

    let wealth_factor = 0.5 + team.wealth as f64 / 100.0; // 0.5 .. 1.5
    let prestige_factor = 0.75 + 0.5 * team.prestige as f64 / 100.0; // 0.75 .. 1.25
    let booster_factor = 0.8 + 0.5 * team.booster_strength as f64 / 100.0; // 0.8 .. 1.3

    let cap = base * wealth_factor * prestige_factor * booster_factor;
    round_to_thousand(cap).clamp(CAP_FLOOR, CAP_CEILING)
}

/// Spend after soft-cap taxation: dollars above the cap buy at 50%
/// efficiency. Monotone in `spend`; equal to `spend` at or below the cap.
pub fn effective_spend(spend: u64, cap: u64) -> u64 {
    if spend <= cap {
        spend
    } else {
        cap + (spend - cap) / 2
    }
}

/// Full budget summary for a program at a given spend level.
pub fn budget_report(team: &TeamContext, spend: u64) -> BudgetReport {
    let cap = budget_cap(team);
    let effective = effective_spend(spend, cap);
    BudgetReport {
        team: team.name.clone(),
        cap,
        spend,
        effective_spend: effective,
        tax: spend - effective,
        over_cap: spend > cap,
    }
}

fn round_to_thousand(dollars: f64) -> u64 {
    ((dollars / 1000.0).round() * 1000.0).max(0.0) as u64
}
