//! Basic database query operations

use anyhow::Result;
use rusqlite::params;

use super::{models::*, schema::LookupDatabase};
use crate::cli::types::{CoachId, PlayerId, Season};
use crate::core::normalize::normalize_name;

/// Row counts per reference table, for ingest summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub nba_players: u64,
    pub nba_salaries: u64,
    pub draft_history: u64,
    pub coach_records: u64,
}

impl LookupDatabase {
    /// Insert or replace NBA reference players inside one transaction
    pub fn bulk_upsert_nba_players(&mut self, players: &[NbaPlayer]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO nba_players
                 (player_id, name, normalized_name, position, height_in, ppg, rpg, apg, team)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for p in players {
                stmt.execute(params![
                    p.player_id.as_u64(),
                    p.name,
                    p.normalized_name,
                    p.position,
                    p.height_in,
                    p.ppg,
                    p.rpg,
                    p.apg,
                    p.team,
                ])?;
            }
        }
        tx.commit()?;
        Ok(players.len())
    }

    /// Insert or replace salary rows inside one transaction
    pub fn bulk_upsert_salaries(&mut self, rows: &[SalaryRow]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO nba_salaries (normalized_name, season, salary)
                 VALUES (?, ?, ?)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.normalized_name,
                    row.season.as_u16(),
                    row.salary
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Insert or replace draft picks inside one transaction
    pub fn bulk_upsert_draft_picks(&mut self, picks: &[DraftPick]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO draft_history
                 (year, round, pick, normalized_name, college)
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            for p in picks {
                stmt.execute(params![p.year, p.round, p.pick, p.normalized_name, p.college])?;
            }
        }
        tx.commit()?;
        Ok(picks.len())
    }

    /// Insert or update coach careers inside one transaction
    ///
    /// Conflicts on normalized name update the career totals in place, so
    /// re-running an ingest refreshes rather than duplicates.
    pub fn bulk_upsert_coaches(&mut self, coaches: &[CoachCareer]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO coach_records
                 (name, normalized_name, school, seasons, wins, losses, tournament_appearances)
                 VALUES (?, ?, ?, ?, ?, ?, ?)
                 ON CONFLICT(normalized_name) DO UPDATE SET
                     name = excluded.name,
                     school = excluded.school,
                     seasons = excluded.seasons,
                     wins = excluded.wins,
                     losses = excluded.losses,
                     tournament_appearances = excluded.tournament_appearances",
            )?;
            for c in coaches {
                stmt.execute(params![
                    c.name,
                    normalize_name(&c.name),
                    c.school,
                    c.seasons,
                    c.wins,
                    c.losses,
                    c.tournament_appearances,
                ])?;
            }
        }
        tx.commit()?;
        Ok(coaches.len())
    }

    /// Look up a coach record by (unnormalized) name
    pub fn get_coach(&self, name: &str) -> Result<Option<CoachRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT coach_id, name, normalized_name, school,
                    seasons, wins, losses, tournament_appearances
             FROM coach_records
             WHERE normalized_name = ?",
        )?;

        let result = stmt.query_row(params![normalize_name(name)], |row| {
            Ok(CoachRecord {
                coach_id: CoachId::new(row.get(0)?),
                name: row.get(1)?,
                normalized_name: row.get(2)?,
                school: row.get(3)?,
                seasons: row.get(4)?,
                wins: row.get(5)?,
                losses: row.get(6)?,
                tournament_appearances: row.get(7)?,
            })
        });

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up one season's salary for a normalized player name
    pub fn get_salary(&self, normalized_name: &str, season: Season) -> Result<Option<u64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT salary FROM nba_salaries WHERE normalized_name = ? AND season = ?")?;

        let result = stmt.query_row(params![normalized_name, season.as_u16()], |row| {
            row.get::<_, u64>(0)
        });

        match result {
            Ok(salary) => Ok(Some(salary)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up the draft pedigree for a normalized player name
    pub fn get_draft_pick(&self, normalized_name: &str) -> Result<Option<DraftPick>> {
        let mut stmt = self.conn.prepare(
            "SELECT year, round, pick, normalized_name, college
             FROM draft_history
             WHERE normalized_name = ?
             ORDER BY year DESC",
        )?;

        let result = stmt.query_row(params![normalized_name], |row| {
            Ok(DraftPick {
                year: row.get(0)?,
                round: row.get(1)?,
                pick: row.get(2)?,
                normalized_name: row.get(3)?,
                college: row.get(4)?,
            })
        });

        match result {
            Ok(pick) => Ok(Some(pick)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get an NBA reference player by exact normalized name
    pub fn get_nba_player(&self, normalized_name: &str) -> Result<Option<NbaPlayer>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, normalized_name, position, height_in, ppg, rpg, apg, team
             FROM nba_players
             WHERE normalized_name = ?",
        )?;

        let result = stmt.query_row(params![normalized_name], |row| {
            Ok(NbaPlayer {
                player_id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                normalized_name: row.get(2)?,
                position: row.get(3)?,
                height_in: row.get(4)?,
                ppg: row.get(5)?,
                rpg: row.get(6)?,
                apg: row.get(7)?,
                team: row.get(8)?,
            })
        });

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete every row from one table
    pub fn clear_table(&mut self, table: ReferenceTable) -> Result<()> {
        self.conn
            .execute(&format!("DELETE FROM {}", table.table_name()), [])?;
        Ok(())
    }

    /// Clear all reference data (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        for table in ReferenceTable::all() {
            self.clear_table(table)?;
        }
        Ok(())
    }

    /// Row counts across the reference tables
    pub fn table_counts(&self) -> Result<TableCounts> {
        let count = |sql: &str| -> Result<u64> {
            let mut stmt = self.conn.prepare(sql)?;
            Ok(stmt.query_row([], |row| row.get::<_, u64>(0))?)
        };

        Ok(TableCounts {
            nba_players: count("SELECT COUNT(*) FROM nba_players")?,
            nba_salaries: count("SELECT COUNT(*) FROM nba_salaries")?,
            draft_history: count("SELECT COUNT(*) FROM draft_history")?,
            coach_records: count("SELECT COUNT(*) FROM coach_records")?,
        })
    }
}

/// The four reference tables, named for clear/ingest operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
    NbaPlayers,
    NbaSalaries,
    DraftHistory,
    CoachRecords,
}

impl ReferenceTable {
    pub fn all() -> [ReferenceTable; 4] {
        [
            ReferenceTable::NbaPlayers,
            ReferenceTable::NbaSalaries,
            ReferenceTable::DraftHistory,
            ReferenceTable::CoachRecords,
        ]
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            ReferenceTable::NbaPlayers => "nba_players",
            ReferenceTable::NbaSalaries => "nba_salaries",
            ReferenceTable::DraftHistory => "draft_history",
            ReferenceTable::CoachRecords => "coach_records",
        }
    }
}
