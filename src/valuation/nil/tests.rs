use super::*;
use crate::cli::types::{ClassYear, PlayerId, Position, TeamId};
use crate::valuation::types::{
    ConferenceTier, MarketSize, Personality, PlayerProfile, SponsorTier,
};

fn star_line() -> SeasonLine {
    SeasonLine {
        games: 30,
        minutes: 34.0,
        points: 22.5,
        rebounds: 7.0,
        assists: 4.5,
        steals: 1.5,
        blocks: 1.0,
        turnovers: 2.5,
        fg_pct: 0.52,
        three_pct: 0.38,
        ft_pct: 0.81,
    }
}

fn player(line: SeasonLine) -> PlayerProfile {
    PlayerProfile {
        player_id: PlayerId::new(1),
        name: "Test Player".to_string(),
        position: Position::SF,
        class: ClassYear::Junior,
        height_in: Some(79),
        stats: line,
        overall: 85,
        potential: 92,
        draft_projection: Some(DraftProjection::FirstRound),
        followers: 250_000,
        sponsor: SponsorTier::None,
        team_id: None,
        personality: Personality::default(),
    }
}

fn team() -> TeamContext {
    TeamContext {
        team_id: TeamId::new(1),
        name: "State".to_string(),
        conference_tier: ConferenceTier::Power,
        prestige: 80,
        wealth: 75,
        booster_strength: 60,
        market_size: MarketSize::Large,
        nil_spend: 0,
    }
}

#[test]
fn test_performance_score_zero_games() {
    assert_eq!(performance_score(&SeasonLine::empty()), 0.0);
}

#[test]
fn test_performance_score_bounds() {
    // A monster line still caps at 1.0
    let monster = SeasonLine {
        games: 30,
        minutes: 40.0,
        points: 35.0,
        rebounds: 15.0,
        assists: 10.0,
        steals: 3.0,
        blocks: 3.0,
        turnovers: 1.0,
        fg_pct: 0.6,
        three_pct: 0.45,
        ft_pct: 0.9,
    };
    let score = performance_score(&monster);
    assert!(score > 0.9);
    assert!(score <= 1.0);

    let modest = SeasonLine {
        games: 20,
        minutes: 12.0,
        points: 3.0,
        rebounds: 1.5,
        assists: 0.5,
        steals: 0.3,
        blocks: 0.1,
        turnovers: 0.8,
        fg_pct: 0.4,
        three_pct: 0.3,
        ft_pct: 0.7,
    };
    let score = performance_score(&modest);
    assert!(score > 0.0);
    assert!(score < 0.2);
}

#[test]
fn test_draft_scores_are_monotone() {
    let ladder = [
        draft_score(None),
        draft_score(Some(DraftProjection::Undrafted)),
        draft_score(Some(DraftProjection::SecondRound)),
        draft_score(Some(DraftProjection::FirstRound)),
        draft_score(Some(DraftProjection::Lottery)),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(draft_score(Some(DraftProjection::Lottery)), 1.0);
}

#[test]
fn test_social_score_is_logarithmic() {
    assert_eq!(social_score(0), 0.0);
    let small = social_score(1_000);
    let big = social_score(1_000_000);
    assert!(small > 0.0);
    assert!(big > small);
    assert!((big - 6.0 / 7.0).abs() < 1e-9);
    // A planet-scale following caps at 1.0
    assert_eq!(social_score(100_000_000_000), 1.0);
}

#[test]
fn test_valuation_stays_within_bounds() {
    // Sweep a grid of profiles; invariant: floor <= value <= ceiling
    let lines = [SeasonLine::empty(), star_line()];
    let projections = [None, Some(DraftProjection::Lottery)];
    let sponsors = [SponsorTier::None, SponsorTier::National];
    let hypes = [1.0, 1.35];

    for line in lines {
        for projection in projections {
            for sponsor in sponsors {
                for hype in hypes {
                    let mut p = player(line);
                    p.draft_projection = projection;
                    p.sponsor = sponsor;
                    let v = evaluate(&p, &team(), hype);
                    assert!(v.value >= VALUE_FLOOR, "value {} below floor", v.value);
                    assert!(v.value <= VALUE_CEILING, "value {} above ceiling", v.value);
                    assert!((0.0..=1.0).contains(&v.composite));
                }
            }
        }
    }
}

#[test]
fn test_no_resume_player_value_is_market_driven() {
    let mut p = player(SeasonLine::empty());
    p.draft_projection = None;
    p.followers = 0;
    p.sponsor = SponsorTier::None;

    let v = evaluate(&p, &team(), 1.0);
    assert_eq!(v.components.performance, 0.0);
    assert_eq!(v.components.social, 0.0);
    // Only market and the unprojected draft sliver contribute
    assert!((v.composite - 0.22).abs() < 1e-9);
    assert!(v.value > VALUE_FLOOR);
    assert!(v.value < 400_000);
}

#[test]
fn test_sponsor_tier_raises_value() {
    let p_none = player(star_line());
    let mut p_national = player(star_line());
    p_national.sponsor = SponsorTier::National;

    let t = team();
    let v_none = evaluate(&p_none, &t, 1.0);
    let v_national = evaluate(&p_national, &t, 1.0);
    assert!(v_national.value > v_none.value);
    assert_eq!(v_national.sponsor_multiplier, 1.5);
}

#[test]
fn test_comp_hype_raises_value() {
    let p = player(star_line());
    let t = team();
    let flat = evaluate(&p, &t, 1.0);
    let hyped = evaluate(&p, &t, 1.35);
    assert!(hyped.value > flat.value);
}

#[test]
fn test_value_rounds_to_hundreds() {
    let v = evaluate(&player(star_line()), &team(), 1.0);
    assert_eq!(v.value % 100, 0);
}

#[test]
fn test_convexity_rewards_stars() {
    // Doubling the composite more than doubles the dollars above the floor
    let mut bench = player(star_line());
    bench.draft_projection = None;
    bench.followers = 0;
    bench.stats.points = 6.0;
    bench.stats.rebounds = 2.0;
    bench.stats.assists = 1.0;
    bench.stats.minutes = 15.0;

    let star = player(star_line());
    let t = team();

    let v_bench = evaluate(&bench, &t, 1.0);
    let v_star = evaluate(&star, &t, 1.0);

    let bench_premium = v_bench.value - VALUE_FLOOR;
    let star_premium = v_star.value - VALUE_FLOOR;
    let composite_ratio = v_star.composite / v_bench.composite;
    assert!(star_premium as f64 > composite_ratio * bench_premium as f64);
}
