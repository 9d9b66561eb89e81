use tempfile::tempdir;

use super::*;
use crate::cli::types::{PlayerId, Position, Season};
use crate::core::cache::{CompPoolCacheKey, SalaryStatsCacheKey, GLOBAL_CACHE};

fn test_db(dir: &tempfile::TempDir) -> LookupDatabase {
    LookupDatabase::with_path(&dir.path().join("test.db")).expect("Failed to create test database")
}

fn nba_player(id: u64, name: &str, position: &str, ppg: f64, rpg: f64, apg: f64) -> NbaPlayer {
    NbaPlayer {
        player_id: PlayerId::new(id),
        name: name.to_string(),
        normalized_name: crate::core::normalize::normalize_name(name),
        position: position.to_string(),
        height_in: Some(78),
        ppg,
        rpg,
        apg,
        team: Some("TST".to_string()),
    }
}

// Each test uses its own far-future season so the global disk cache can
// never hand one test another test's pool.
fn fresh_season(year: u16) -> Season {
    let season = Season::new(year);
    let _ = GLOBAL_CACHE
        .salary_stats
        .invalidate_disk_cache(&SalaryStatsCacheKey { season });
    for position in Position::all() {
        let _ = GLOBAL_CACHE
            .comp_pools
            .invalidate_disk_cache(&CompPoolCacheKey { season, position });
    }
    GLOBAL_CACHE.clear_all_memory();
    season
}

#[test]
fn test_nba_player_round_trip() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);

    let player = nba_player(201, "Test Forward", "F", 14.5, 6.2, 2.1);
    db.bulk_upsert_nba_players(std::slice::from_ref(&player))
        .unwrap();

    let loaded = db.get_nba_player("test forward").unwrap().unwrap();
    assert_eq!(loaded, player);

    assert!(db.get_nba_player("nobody").unwrap().is_none());
}

#[test]
fn test_upsert_replaces_on_same_player_id() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);

    let v1 = nba_player(202, "Evolving Guard", "G", 10.0, 3.0, 4.0);
    let mut v2 = v1.clone();
    v2.ppg = 18.0;

    db.bulk_upsert_nba_players(&[v1]).unwrap();
    db.bulk_upsert_nba_players(&[v2]).unwrap();

    assert_eq!(db.table_counts().unwrap().nba_players, 1);
    let loaded = db.get_nba_player("evolving guard").unwrap().unwrap();
    assert_eq!(loaded.ppg, 18.0);
}

#[test]
fn test_salary_lookup_and_percentile() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);
    let season = fresh_season(8201);

    let rows: Vec<SalaryRow> = [
        ("player a", 1_000_000),
        ("player b", 5_000_000),
        ("player c", 10_000_000),
        ("player d", 40_000_000),
    ]
    .iter()
    .map(|(name, salary)| SalaryRow {
        normalized_name: name.to_string(),
        season,
        salary: *salary,
    })
    .collect();
    db.bulk_upsert_salaries(&rows).unwrap();

    assert_eq!(db.get_salary("player b", season).unwrap(), Some(5_000_000));
    assert_eq!(db.get_salary("player b", Season::new(1900)).unwrap(), None);

    // Percentile: fraction at or below, so the max is exactly 1.0
    assert_eq!(db.salary_percentile(season, 40_000_000).unwrap(), Some(1.0));
    assert_eq!(db.salary_percentile(season, 5_000_000).unwrap(), Some(0.5));
    assert_eq!(db.salary_percentile(season, 100).unwrap(), Some(0.0));

    // Empty pool has no percentile
    assert_eq!(
        db.salary_percentile(Season::new(1900), 1_000_000).unwrap(),
        None
    );
}

#[test]
fn test_salary_pool_stats() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);
    let season = fresh_season(8202);

    assert_eq!(db.salary_pool_stats(Season::new(1901)).unwrap(), None);

    let rows: Vec<SalaryRow> = [2_000_000u64, 4_000_000, 6_000_000]
        .iter()
        .enumerate()
        .map(|(i, salary)| SalaryRow {
            normalized_name: format!("pool player {i}"),
            season,
            salary: *salary,
        })
        .collect();
    db.bulk_upsert_salaries(&rows).unwrap();

    let stats = db.salary_pool_stats(season).unwrap().unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.mean - 4_000_000.0).abs() < 1e-6);
    assert_eq!(stats.min, 2_000_000);
    assert_eq!(stats.max, 6_000_000);
}

#[test]
fn test_comp_candidates_joins_and_position_gate() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);
    let season = fresh_season(8203);

    db.bulk_upsert_nba_players(&[
        nba_player(301, "Paid Guard", "PG", 20.0, 4.0, 7.0),
        nba_player(302, "Combo Wing", "G-F", 15.0, 5.0, 3.0),
        nba_player(303, "Pure Center", "C", 12.0, 10.0, 1.5),
    ])
    .unwrap();

    db.bulk_upsert_salaries(&[SalaryRow {
        normalized_name: "paid guard".to_string(),
        season,
        salary: 25_000_000,
    }])
    .unwrap();

    db.bulk_upsert_draft_picks(&[DraftPick {
        year: 2021,
        round: 1,
        pick: 5,
        normalized_name: "paid guard".to_string(),
        college: Some("State".to_string()),
    }])
    .unwrap();

    let candidates = db.comp_candidates(season, Position::PG).unwrap();
    // PG matches "PG" and the G half of "G-F", never "C"
    assert_eq!(candidates.len(), 2);

    let paid = candidates
        .iter()
        .find(|c| c.player.name == "Paid Guard")
        .unwrap();
    assert_eq!(paid.salary, Some(25_000_000));
    let draft = paid.draft.as_ref().unwrap();
    assert_eq!(draft.pick, 5);
    assert_eq!(draft.college.as_deref(), Some("State"));

    let combo = candidates
        .iter()
        .find(|c| c.player.name == "Combo Wing")
        .unwrap();
    assert_eq!(combo.salary, None);
    assert!(combo.draft.is_none());

    let centers = db.comp_candidates(season, Position::C).unwrap();
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0].player.name, "Pure Center");
}

#[test]
fn test_clear_table_and_clear_all() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);
    let season = fresh_season(8204);

    db.bulk_upsert_nba_players(&[nba_player(401, "Someone", "F", 9.0, 4.0, 1.0)])
        .unwrap();
    db.bulk_upsert_salaries(&[SalaryRow {
        normalized_name: "someone".to_string(),
        season,
        salary: 3_000_000,
    }])
    .unwrap();
    db.bulk_upsert_coaches(&[CoachCareer {
        name: "Some Coach".to_string(),
        school: None,
        seasons: 5,
        wins: 80,
        losses: 70,
        tournament_appearances: 1,
    }])
    .unwrap();

    db.clear_table(queries::ReferenceTable::NbaSalaries).unwrap();
    let counts = db.table_counts().unwrap();
    assert_eq!(counts.nba_salaries, 0);
    assert_eq!(counts.nba_players, 1);
    assert_eq!(counts.coach_records, 1);

    db.clear_all_data().unwrap();
    let counts = db.table_counts().unwrap();
    assert_eq!(counts.nba_players, 0);
    assert_eq!(counts.coach_records, 0);
}

#[test]
fn test_coach_lookup_uses_normalization() {
    let dir = tempdir().unwrap();
    let mut db = test_db(&dir);

    db.bulk_upsert_coaches(&[CoachCareer {
        name: "Raūl Martínez Jr.".to_string(),
        school: Some("Coastal Tech".to_string()),
        seasons: 7,
        wins: 140,
        losses: 85,
        tournament_appearances: 3,
    }])
    .unwrap();

    // Any spelling variant of the name should find the record
    let record = db.get_coach("raul martinez").unwrap().unwrap();
    assert_eq!(record.school.as_deref(), Some("Coastal Tech"));
    assert_eq!(record.seasons, 7);
    assert!(record.coach_id.as_u32() > 0);

    assert!(db.get_coach("someone else").unwrap().is_none());
}
