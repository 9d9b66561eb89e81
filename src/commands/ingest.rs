//! Ingest command: build the reference lookup tables.

use crate::{
    cli::IngestCmd,
    core::cache::GLOBAL_CACHE,
    ingest::{
        coaches::ingest_coaches, draft::ingest_draft, rosters::ingest_rosters,
        salaries::ingest_salaries, IngestSummary,
    },
    storage::{queries::ReferenceTable, LookupDatabase},
    Result,
};

/// Run one ingest subcommand against the reference database.
pub fn handle_ingest(cmd: IngestCmd) -> Result<()> {
    let mut db = LookupDatabase::new()?;

    let (table, summary) = match cmd {
        IngestCmd::Salaries {
            file,
            season,
            clear,
        } => {
            if clear {
                db.clear_table(ReferenceTable::NbaSalaries)?;
            }
            println!("Loading salaries for season {} from {}...", season, file.display());
            (
                ReferenceTable::NbaSalaries,
                ingest_salaries(&mut db, &file, season)?,
            )
        }
        IngestCmd::Draft { file, clear } => {
            if clear {
                db.clear_table(ReferenceTable::DraftHistory)?;
            }
            println!("Loading draft history from {}...", file.display());
            (ReferenceTable::DraftHistory, ingest_draft(&mut db, &file)?)
        }
        IngestCmd::Coaches { file, clear } => {
            if clear {
                db.clear_table(ReferenceTable::CoachRecords)?;
            }
            println!("Loading coach records from {}...", file.display());
            (ReferenceTable::CoachRecords, ingest_coaches(&mut db, &file)?)
        }
        IngestCmd::Rosters { file, clear } => {
            if clear {
                db.clear_table(ReferenceTable::NbaPlayers)?;
            }
            println!("Loading NBA rosters from {}...", file.display());
            (ReferenceTable::NbaPlayers, ingest_rosters(&mut db, &file)?)
        }
    };

    report(table, &summary);

    // Derived pools are stale now
    GLOBAL_CACHE.invalidate_derived();

    let counts = db.table_counts()?;
    println!(
        "  Tables: {} players, {} salaries, {} picks, {} coaches",
        counts.nba_players, counts.nba_salaries, counts.draft_history, counts.coach_records,
    );

    Ok(())
}

fn report(table: ReferenceTable, summary: &IngestSummary) {
    if summary.skipped > 0 {
        println!(
            "✓ Ingested {} rows into {} (⚠ {} malformed row{} skipped)",
            summary.inserted,
            table.table_name(),
            summary.skipped,
            if summary.skipped == 1 { "" } else { "s" },
        );
    } else {
        println!(
            "✓ Ingested {} rows into {}",
            summary.inserted,
            table.table_name()
        );
    }
}
