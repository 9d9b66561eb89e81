//! Coach career-record ingestion.

use std::path::Path;

use rayon::prelude::*;

use super::IngestSummary;
use crate::core::csv::{header_index, parse_rows};
use crate::error::{NilError, Result};
use crate::storage::{CoachCareer, LookupDatabase};

/// Load a coach career CSV into `coach_records`.
pub fn ingest_coaches(db: &mut LookupDatabase, path: &Path) -> Result<IngestSummary> {
    let text = std::fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, ',');
    if rows.is_empty() {
        return Err(NilError::EmptyInput {
            path: path.display().to_string(),
        });
    }

    let header = rows.remove(0);
    let missing = |column: &str| NilError::MissingColumn {
        column: column.to_string(),
        path: path.display().to_string(),
    };

    let name_idx = header_index(&header, &["coach", "name"]).ok_or_else(|| missing("coach"))?;
    let seasons_idx =
        header_index(&header, &["seasons", "yrs", "years"]).ok_or_else(|| missing("seasons"))?;
    let wins_idx = header_index(&header, &["wins", "w"]).ok_or_else(|| missing("wins"))?;
    let losses_idx = header_index(&header, &["losses", "l"]).ok_or_else(|| missing("losses"))?;
    let school_idx = header_index(&header, &["school", "team"]);
    let tourney_idx = header_index(&header, &["tournament", "ncaa", "tourney"]);

    let records: Vec<CoachCareer> = rows
        .par_iter()
        .filter_map(|row| {
            let name = row.get(name_idx)?.trim();
            if name.is_empty() {
                return None;
            }
            let seasons: u16 = row.get(seasons_idx)?.trim().parse().ok()?;
            let wins: u32 = row.get(wins_idx)?.trim().parse().ok()?;
            let losses: u32 = row.get(losses_idx)?.trim().parse().ok()?;

            let school = school_idx
                .and_then(|i| row.get(i))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let tournament_appearances: u16 = tourney_idx
                .and_then(|i| row.get(i))
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0);

            Some(CoachCareer {
                name: name.to_string(),
                school,
                seasons,
                wins,
                losses,
                tournament_appearances,
            })
        })
        .collect();

    let skipped = rows.len() - records.len();
    let inserted = db.bulk_upsert_coaches(&records)?;

    Ok(IngestSummary { inserted, skipped })
}
