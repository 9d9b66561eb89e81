//! NBA draft history ingestion.

use std::path::Path;

use rayon::prelude::*;

use super::IngestSummary;
use crate::core::csv::{header_index, parse_rows};
use crate::core::normalize::normalize_name;
use crate::error::{NilError, Result};
use crate::storage::{DraftPick, LookupDatabase};

/// Load a draft history CSV into `draft_history`.
pub fn ingest_draft(db: &mut LookupDatabase, path: &Path) -> Result<IngestSummary> {
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

    let year_idx = header_index(&header, &["year", "draft"]).ok_or_else(|| missing("year"))?;
    let round_idx = header_index(&header, &["round", "rd"]).ok_or_else(|| missing("round"))?;
    let pick_idx = header_index(&header, &["pick", "pk"]).ok_or_else(|| missing("pick"))?;
    let name_idx = header_index(&header, &["player", "name"]).ok_or_else(|| missing("player"))?;
    let college_idx = header_index(&header, &["college", "school"]);

    let records: Vec<DraftPick> = rows
        .par_iter()
        .filter_map(|row| {
            let name = row.get(name_idx)?.trim();
            if name.is_empty() {
                return None;
            }
            let year: u16 = row.get(year_idx)?.trim().parse().ok()?;
            let round: u8 = row.get(round_idx)?.trim().parse().ok()?;
            let pick: u8 = row.get(pick_idx)?.trim().parse().ok()?;

            let college = college_idx
                .and_then(|i| row.get(i))
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string);

            Some(DraftPick {
                year,
                round,
                pick,
                normalized_name: normalize_name(name),
                college,
            })
        })
        .collect();

    let skipped = rows.len() - records.len();
    let inserted = db.bulk_upsert_draft_picks(&records)?;

    Ok(IngestSummary { inserted, skipped })
}
