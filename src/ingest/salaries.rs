//! NBA salary table ingestion.

use std::path::Path;

use rayon::prelude::*;

use super::{parse_dollars, IngestSummary};
use crate::cli::types::Season;
use crate::core::csv::{header_index, parse_rows};
use crate::core::normalize::normalize_name;
use crate::error::{NilError, Result};
use crate::storage::{LookupDatabase, SalaryRow};

/// Load a salary CSV (player + salary columns) into `nba_salaries`.
pub fn ingest_salaries(
    db: &mut LookupDatabase,
    path: &Path,
    season: Season,
) -> Result<IngestSummary> {
    let text = std::fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, ',');
    if rows.is_empty() {
        return Err(NilError::EmptyInput {
            path: path.display().to_string(),
        });
    }

    let header = rows.remove(0);
    let name_idx = header_index(&header, &["player", "name"]).ok_or_else(|| {
        NilError::MissingColumn {
            column: "player".to_string(),
            path: path.display().to_string(),
        }
    })?;
    let salary_idx = header_index(&header, &["salary", "amount"]).ok_or_else(|| {
        NilError::MissingColumn {
            column: "salary".to_string(),
            path: path.display().to_string(),
        }
    })?;

    let records: Vec<SalaryRow> = rows
        .par_iter()
        .filter_map(|row| parse_salary_row(row, name_idx, salary_idx, season))
        .collect();

    let skipped = rows.len() - records.len();
    let inserted = db.bulk_upsert_salaries(&records)?;

    Ok(IngestSummary { inserted, skipped })
}

fn parse_salary_row(
    row: &[String],
    name_idx: usize,
    salary_idx: usize,
    season: Season,
) -> Option<SalaryRow> {
    let name = row.get(name_idx)?.trim();
    if name.is_empty() {
        return None;
    }
    let salary = parse_dollars(row.get(salary_idx)?)?;

    Some(SalaryRow {
        normalized_name: normalize_name(name),
        season,
        salary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_db(dir: &tempfile::TempDir) -> LookupDatabase {
        LookupDatabase::with_path(&dir.path().join("test.db")).unwrap()
    }

    #[test]
    fn test_ingest_salaries_happy_path_and_skips() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("salaries.csv");
        std::fs::write(
            &csv_path,
            "Player,Tm,Salary\n\
             Nikola Jokić,DEN,\"$51,415,938\"\n\
             Jaren Jackson Jr.,MEM,\"$23,413,395\"\n\
             ,BOS,\"$1,000,000\"\n\
             Two Way Guy,SAC,TBD\n",
        )
        .unwrap();

        let mut db = test_db(&dir);
        let season = Season::new(8101);
        let summary = ingest_salaries(&mut db, &csv_path, season).unwrap();

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 2);

        // Names joined through normalization
        assert_eq!(
            db.get_salary("nikola jokic", season).unwrap(),
            Some(51_415_938)
        );
        assert_eq!(
            db.get_salary("jaren jackson", season).unwrap(),
            Some(23_413_395)
        );
    }

    #[test]
    fn test_ingest_salaries_missing_column() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("bad.csv");
        std::fs::write(&csv_path, "Player,Team\nSomeone,DEN\n").unwrap();

        let mut db = test_db(&dir);
        let err = ingest_salaries(&mut db, &csv_path, Season::new(8102)).unwrap_err();
        assert!(matches!(err, NilError::MissingColumn { .. }));
    }

    #[test]
    fn test_ingest_salaries_empty_file() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("empty.csv");
        std::fs::write(&csv_path, "").unwrap();

        let mut db = test_db(&dir);
        let err = ingest_salaries(&mut db, &csv_path, Season::new(8103)).unwrap_err();
        assert!(matches!(err, NilError::EmptyInput { .. }));
    }
}
