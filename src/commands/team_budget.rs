//! Program budget cap and soft-cap taxation.

use std::path::Path;

use crate::{valuation::budget::budget_report, Result};

use super::common::{format_dollars, load_team};

/// Compute and print a program's NIL budget report.
///
/// `spend` overrides the team file's committed spend when provided.
pub fn handle_team_budget(team_path: &Path, spend: Option<u64>, as_json: bool) -> Result<()> {
    let team = load_team(team_path)?;
    let spend = spend.unwrap_or(team.nil_spend);
    let report = budget_report(&team, spend);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("✓ {} NIL budget", report.team);
        println!("  Cap:       {}", format_dollars(report.cap));
        println!("  Spend:     {}", format_dollars(report.spend));
        println!("  Effective: {}", format_dollars(report.effective_spend));
        if report.over_cap {
            println!(
                "  ⚠ Over the soft cap: {} lost to the 50% tax",
                format_dollars(report.tax)
            );
        } else {
            println!(
                "  Headroom:  {}",
                format_dollars(report.cap - report.spend)
            );
        }
    }

    Ok(())
}
