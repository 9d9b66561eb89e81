//! Analysis operations over the reference tables
//!
//! Salary-pool statistics and comparable-candidate pools are recomputed
//! rarely (once per ingest) and read on every valuation tick, so both go
//! through the global two-tier cache.

use anyhow::Result;
use rusqlite::params;

use super::{models::*, schema::LookupDatabase};
use crate::cli::types::{PlayerId, Position, Season};
use crate::core::cache::{CompPoolCacheKey, SalaryStatsCacheKey, GLOBAL_CACHE};

/// Threshold below which a pool's standard deviation is treated as zero.
const STDEV_EPSILON: f64 = 1e-9;

impl LookupDatabase {
    /// Mean, spread and extremes of one season's salary pool.
    ///
    /// Returns `None` when the season has no ingested salaries.
    pub fn salary_pool_stats(&self, season: Season) -> Result<Option<SalaryPoolStats>> {
        let cache_key = SalaryStatsCacheKey { season };
        if let Some(cached) = GLOBAL_CACHE.salary_stats.get(&cache_key) {
            return Ok(cached);
        }

        let mut stmt = self
            .conn
            .prepare("SELECT salary FROM nba_salaries WHERE season = ?")?;
        let rows = stmt.query_map(params![season.as_u16()], |row| row.get::<_, u64>(0))?;

        let mut salaries = Vec::new();
        for row in rows {
            salaries.push(row?);
        }

        let result = compute_pool_stats(&salaries);
        GLOBAL_CACHE.salary_stats.put(cache_key, result);

        Ok(result)
    }

    /// Percentile of a dollar figure within one season's salary pool.
    ///
    /// Defined as the fraction of the pool at or below the figure, so the
    /// pool maximum sits at exactly 1.0. Returns `None` for an empty pool.
    pub fn salary_percentile(&self, season: Season, amount: u64) -> Result<Option<f64>> {
        let total: u64 = self.conn.query_row(
            "SELECT COUNT(*) FROM nba_salaries WHERE season = ?",
            params![season.as_u16()],
            |row| row.get(0),
        )?;

        if total == 0 {
            return Ok(None);
        }

        let at_or_below: u64 = self.conn.query_row(
            "SELECT COUNT(*) FROM nba_salaries WHERE season = ? AND salary <= ?",
            params![season.as_u16(), amount],
            |row| row.get(0),
        )?;

        Ok(Some(at_or_below as f64 / total as f64))
    }

    /// Comparable candidates for a college position: every NBA reference
    /// player with a compatible roster label, joined against the season's
    /// salary table and draft history.
    pub fn comp_candidates(
        &self,
        season: Season,
        position: Position,
    ) -> Result<Vec<CompCandidate>> {
        let cache_key = CompPoolCacheKey { season, position };
        if let Some(cached) = GLOBAL_CACHE.comp_pools.get(&cache_key) {
            return Ok(cached);
        }

        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.name, p.normalized_name, p.position, p.height_in,
                    p.ppg, p.rpg, p.apg, p.team,
                    s.salary,
                    d.year, d.round, d.pick, d.college
             FROM nba_players p
             LEFT JOIN nba_salaries s
                    ON s.normalized_name = p.normalized_name AND s.season = ?1
             LEFT JOIN draft_history d
                    ON d.normalized_name = p.normalized_name",
        )?;

        let rows = stmt.query_map(params![season.as_u16()], |row| {
            let player = NbaPlayer {
                player_id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                normalized_name: row.get(2)?,
                position: row.get(3)?,
                height_in: row.get(4)?,
                ppg: row.get(5)?,
                rpg: row.get(6)?,
                apg: row.get(7)?,
                team: row.get(8)?,
            };
            let salary: Option<u64> = row.get(9)?;
            let draft_year: Option<u16> = row.get(10)?;
            let draft = match draft_year {
                Some(year) => Some(DraftPick {
                    year,
                    round: row.get(11)?,
                    pick: row.get(12)?,
                    normalized_name: player.normalized_name.clone(),
                    college: row.get(13)?,
                }),
                None => None,
            };
            Ok(CompCandidate {
                player,
                salary,
                draft,
            })
        })?;

        let mut candidates = Vec::new();
        for row in rows {
            let candidate: CompCandidate = row?;
            if position.matches_nba_label(&candidate.player.position) {
                candidates.push(candidate);
            }
        }

        GLOBAL_CACHE.comp_pools.put(cache_key, candidates.clone());

        Ok(candidates)
    }
}

/// Compute pool statistics for a slice of salaries.
///
/// Uses the population standard deviation (N denominator): the ingested
/// table is the full relevant pool, not a sample. A near-zero spread is
/// reported as exactly zero.
fn compute_pool_stats(salaries: &[u64]) -> Option<SalaryPoolStats> {
    if salaries.is_empty() {
        return None;
    }

    let n = salaries.len() as f64;
    let mean = salaries.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = salaries
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let stdev = variance.sqrt();
    let stdev = if stdev < STDEV_EPSILON { 0.0 } else { stdev };

    Some(SalaryPoolStats {
        count: salaries.len() as u32,
        mean,
        stdev,
        min: *salaries.iter().min().unwrap_or(&0),
        max: *salaries.iter().max().unwrap_or(&0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_pool_stats_empty() {
        assert_eq!(compute_pool_stats(&[]), None);
    }

    #[test]
    fn test_compute_pool_stats_basic() {
        let stats = compute_pool_stats(&[1_000_000, 2_000_000, 3_000_000]).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 2_000_000.0).abs() < 1e-6);
        assert_eq!(stats.min, 1_000_000);
        assert_eq!(stats.max, 3_000_000);
        // Population stdev of {1M, 2M, 3M} is sqrt(2/3) * 1M
        let expected = (2.0_f64 / 3.0).sqrt() * 1_000_000.0;
        assert!((stats.stdev - expected).abs() < 1.0);
    }

    #[test]
    fn test_compute_pool_stats_degenerate_spread() {
        let stats = compute_pool_stats(&[5_000_000, 5_000_000, 5_000_000]).unwrap();
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.min, stats.max);
    }
}
