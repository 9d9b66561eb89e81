//! Database schema and connection management

use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::error::NilError;

/// Connection manager for the reference lookup tables
pub struct LookupDatabase {
    pub(crate) conn: Connection,
}

impl LookupDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::with_path(&db_path)
    }

    /// Open (or create) a database at an explicit path
    pub fn with_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    ///
    /// Defaults to the user cache directory; `CBB_NIL_DATA_DIR` overrides it.
    fn database_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(crate::DATA_DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir).join("reference.db"));
        }

        let cache_dir = cache_dir().ok_or_else(|| NilError::Database {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("cbb-nil").join("reference.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                normalized_name TEXT NOT NULL,
                position TEXT NOT NULL,
                height_in INTEGER,
                ppg REAL NOT NULL,
                rpg REAL NOT NULL,
                apg REAL NOT NULL,
                team TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nba_salaries (
                normalized_name TEXT NOT NULL,
                season INTEGER NOT NULL,
                salary INTEGER NOT NULL,
                PRIMARY KEY (normalized_name, season)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS draft_history (
                year INTEGER NOT NULL,
                round INTEGER NOT NULL,
                pick INTEGER NOT NULL,
                normalized_name TEXT NOT NULL,
                college TEXT,
                PRIMARY KEY (year, round, pick)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS coach_records (
                coach_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                normalized_name TEXT NOT NULL UNIQUE,
                school TEXT,
                seasons INTEGER NOT NULL,
                wins INTEGER NOT NULL,
                losses INTEGER NOT NULL,
                tournament_appearances INTEGER NOT NULL
            )",
            [],
        )?;

        // Indexes for the name joins the analysis queries lean on
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_nba_players_norm
             ON nba_players(normalized_name)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_draft_history_norm
             ON draft_history(normalized_name)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_nba_salaries_season
             ON nba_salaries(season)",
            [],
        )?;

        Ok(())
    }
}
