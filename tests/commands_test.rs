//! End-to-end command tests: ingest builds the reference database in a
//! scratch data dir, then the query commands run against it.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::tempdir;

use cbb_nil::{
    cli::types::{ClassYear, PlayerId, Position, Season, TeamId},
    cli::IngestCmd,
    commands::{
        comps::{handle_comps, CompsParams},
        ingest::handle_ingest,
        job_market::handle_job_market,
    },
    error::NilError,
    storage::LookupDatabase,
    valuation::types::{
        ConferenceTier, MarketSize, Personality, PlayerProfile, SeasonLine, SponsorTier,
        TeamContext,
    },
    DATA_DIR_ENV_VAR,
};

// Commands resolve the database through CBB_NIL_DATA_DIR; serialize the
// tests that touch it.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_reference_files(dir: &Path) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let rosters = dir.join("rosters.json");
    std::fs::write(
        &rosters,
        r#"[
            {"player_id": 10, "name": "Vet Point", "position": "PG",
             "height": "6-2", "ppg": 21.0, "rpg": 3.5, "apg": 9.0, "team": "VVV"},
            {"player_id": 11, "name": "Two Way Wing", "position": "G-F",
             "height": "6-6", "ppg": 14.0, "rpg": 5.0, "apg": 2.5, "team": "WWW"},
            {"player_id": 12, "name": "Anchor Center", "position": "C",
             "height": "6-11", "ppg": 11.0, "rpg": 12.0, "apg": 1.0, "team": "XXX"}
        ]"#,
    )
    .unwrap();

    let salaries = dir.join("salaries.csv");
    std::fs::write(
        &salaries,
        "Player,Salary\n\
         Vet Point,\"$30,000,000\"\n\
         Two Way Wing,\"$9,000,000\"\n\
         Anchor Center,\"$15,000,000\"\n\
         Waived Guy,not disclosed\n",
    )
    .unwrap();

    let draft = dir.join("draft.csv");
    std::fs::write(
        &draft,
        "Year,Round,Pick,Player,College\n\
         2017,1,9,Vet Point,Harbor State\n",
    )
    .unwrap();

    let coaches = dir.join("coaches.csv");
    std::fs::write(
        &coaches,
        "Coach,School,Seasons,Wins,Losses,Tournament\n\
         Marla Grant,Harbor State,11,260,95,8\n",
    )
    .unwrap();

    (rosters, salaries, draft, coaches)
}

fn write_roster_file(dir: &Path) -> PathBuf {
    let players = vec![PlayerProfile {
        player_id: PlayerId::new(77),
        name: "Campus Star".to_string(),
        position: Position::PG,
        class: ClassYear::Junior,
        height_in: Some(74),
        stats: SeasonLine {
            games: 31,
            minutes: 33.0,
            points: 19.5,
            rebounds: 3.8,
            assists: 7.5,
            steals: 1.6,
            blocks: 0.2,
            turnovers: 2.8,
            fg_pct: 0.48,
            three_pct: 0.39,
            ft_pct: 0.86,
        },
        overall: 84,
        potential: 90,
        draft_projection: None,
        followers: 300_000,
        sponsor: SponsorTier::Regional,
        team_id: Some(TeamId::new(5)),
        personality: Personality::default(),
    }];

    let path = dir.join("players.json");
    std::fs::write(&path, serde_json::to_string_pretty(&players).unwrap()).unwrap();
    path
}

fn write_openings_file(dir: &Path) -> PathBuf {
    let openings = serde_json::json!([
        {
            "team": {
                "team_id": 21,
                "name": "River Tech",
                "conference_tier": "High",
                "prestige": 55,
                "wealth": 60,
                "booster_strength": 50,
                "market_size": "Mid",
                "nil_spend": 0
            },
            "base_salary": 1_800_000
        },
        {
            "team": {
                "team_id": 22,
                "name": "Blue Blood U",
                "conference_tier": "Power",
                "prestige": 97,
                "wealth": 95,
                "booster_strength": 90,
                "market_size": "Metro",
                "nil_spend": 0
            },
            "base_salary": 6_000_000
        }
    ]);

    let path = dir.join("openings.json");
    std::fs::write(&path, serde_json::to_string_pretty(&openings).unwrap()).unwrap();
    path
}

#[test]
fn test_ingest_then_comps_end_to_end() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, dir.path());

    let (rosters, salaries, draft, _coaches) = write_reference_files(dir.path());
    let season = Season::new(8401);

    handle_ingest(IngestCmd::Rosters {
        file: rosters,
        clear: true,
    })
    .unwrap();
    handle_ingest(IngestCmd::Salaries {
        file: salaries,
        season,
        clear: true,
    })
    .unwrap();
    handle_ingest(IngestCmd::Draft {
        file: draft,
        clear: true,
    })
    .unwrap();

    // The tables landed where the env var pointed
    let db = LookupDatabase::with_path(&dir.path().join("reference.db")).unwrap();
    let counts = db.table_counts().unwrap();
    assert_eq!(counts.nba_players, 3);
    assert_eq!(counts.nba_salaries, 3); // "not disclosed" row skipped
    assert_eq!(counts.draft_history, 1);
    drop(db);

    // Comps run against the ingested pool
    handle_comps(CompsParams {
        players_path: write_roster_file(dir.path()),
        player_name: None,
        positions: None,
        class: None,
        season,
        limit: None,
        top: 2,
        as_json: true,
    })
    .unwrap();

    // Text output path too
    handle_comps(CompsParams {
        players_path: write_roster_file(dir.path()),
        player_name: None,
        positions: None,
        class: None,
        season,
        limit: Some(1),
        top: 1,
        as_json: false,
    })
    .unwrap();

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_job_market_end_to_end() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, dir.path());

    let (_rosters, _salaries, _draft, coaches) = write_reference_files(dir.path());
    handle_ingest(IngestCmd::Coaches {
        file: coaches,
        clear: true,
    })
    .unwrap();

    let openings = write_openings_file(dir.path());
    handle_job_market("Marla Grant", &openings, true).unwrap();
    handle_job_market("marla grant", &openings, false).unwrap();

    // Unknown coaches are a typed error
    let err = handle_job_market("Nobody Famous", &openings, true).unwrap_err();
    assert!(matches!(err, NilError::CoachNotFound { .. }));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_ingest_missing_file_is_an_io_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_var(DATA_DIR_ENV_VAR, dir.path());

    let err = handle_ingest(IngestCmd::Draft {
        file: dir.path().join("missing.csv"),
        clear: false,
    })
    .unwrap_err();
    assert!(matches!(err, NilError::Io(_)));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_team_context_fixture_parses_the_documented_shape() {
    // The openings file doubles as documentation of the TeamContext JSON
    // shape; make sure the enums deserialize from their variant names.
    let dir = tempdir().unwrap();
    let path = write_openings_file(dir.path());
    let text = std::fs::read_to_string(path).unwrap();
    let openings: Vec<cbb_nil::valuation::jobs::JobOpening> =
        serde_json::from_str(&text).unwrap();

    assert_eq!(openings.len(), 2);
    let team: &TeamContext = &openings[1].team;
    assert_eq!(team.conference_tier, ConferenceTier::Power);
    assert_eq!(team.market_size, MarketSize::Metro);
    assert_eq!(team.prestige, 97);
}
