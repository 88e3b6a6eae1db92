//! Integration tests for standings recalculation.

use chrono::{DateTime, TimeZone, Utc};
use tournament_engine::{
    calculate_standings, generate_bracket, record_result, set_status, BracketType, EventContext,
    GenerateOptions, MatchupStatus, Standing, TournamentContext, TournamentMode, TournamentStore,
};
use uuid::Uuid;

const NO_SHUFFLE: GenerateOptions = GenerateOptions { shuffle: false };

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn team_event(n: usize) -> EventContext {
    let tournament = TournamentContext::new(Uuid::new_v4(), TournamentMode::TeamVsTeam);
    let mut ctx = EventContext::new(tournament, Uuid::new_v4());
    for i in 0..n {
        let id = Uuid::new_v4();
        ctx.tournament.add_roster_entry(id, format!("Team {i}"));
        ctx.event_entrants.push(id);
    }
    ctx
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 18, 0, 0).unwrap()
}

fn standing_for(rows: &[Standing], id: Uuid) -> Standing {
    rows.iter().find(|s| s.entrant.id() == id).unwrap().clone()
}

/// Team X: 2 wins, 1 loss, 1 draw over 4 matches -> 7 points, 50.00 win rate.
#[test]
fn points_and_win_rate_follow_the_scoring_rules() {
    init_logs();
    let mut store = TournamentStore::new();
    let ctx = team_event(5);
    generate_bracket(&mut store, &ctx, BracketType::RoundRobin, &NO_SHUFFLE).unwrap();

    let x = ctx.event_entrants[0];
    let x_matches: Vec<(Uuid, Uuid)> = store
        .tournament_matchups(ctx.tournament.tournament_id)
        .into_iter()
        .filter(|m| m.entrants.contains(x) && m.status == MatchupStatus::Pending)
        .map(|m| (m.id, m.entrants.opponent_of(x).unwrap()))
        .collect();
    assert_eq!(x_matches.len(), 4);

    record_result(&mut store, x_matches[0].0, Some(3), Some(1), Some(x), at(1)).unwrap();
    record_result(&mut store, x_matches[1].0, Some(2), Some(0), Some(x), at(2)).unwrap();
    record_result(&mut store, x_matches[2].0, Some(0), Some(1), Some(x_matches[2].1), at(3)).unwrap();
    record_result(&mut store, x_matches[3].0, Some(2), Some(2), None, at(4)).unwrap();

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let rows: Vec<Standing> = store
        .standings(ctx.tournament.tournament_id)
        .into_iter()
        .cloned()
        .collect();

    let row = standing_for(&rows, x);
    assert_eq!(row.wins, 2);
    assert_eq!(row.losses, 1);
    assert_eq!(row.draws, 1);
    assert_eq!(row.points, 7);
    assert_eq!(row.win_rate, 50.0);
    assert_eq!(row.matches_played(), 4);
}

#[test]
fn wins_losses_and_draws_balance_across_the_tournament() {
    let mut store = TournamentStore::new();
    let ctx = team_event(4);
    let matchups =
        generate_bracket(&mut store, &ctx, BracketType::RoundRobin, &NO_SHUFFLE).unwrap();

    // First two matches drawn, the remaining four decided for side A.
    for (i, m) in matchups.iter().enumerate() {
        let (winner, scores) = if i < 2 {
            (None, (2, 2))
        } else {
            (m.entrants.side_a(), (3, 1))
        };
        record_result(&mut store, m.id, Some(scores.0), Some(scores.1), winner, at(i as u32 + 1))
            .unwrap();
    }

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let rows: Vec<Standing> = store
        .standings(ctx.tournament.tournament_id)
        .into_iter()
        .cloned()
        .collect();

    let wins: u32 = rows.iter().map(|s| s.wins).sum();
    let losses: u32 = rows.iter().map(|s| s.losses).sum();
    let draws: u32 = rows.iter().map(|s| s.draws).sum();
    assert_eq!(wins, 4);
    assert_eq!(losses, 4);
    assert_eq!(draws, 4); // 2 drawn matchups credit both sides
}

#[test]
fn every_bracket_entrant_gets_a_dense_rank() {
    let mut store = TournamentStore::new();
    let ctx = team_event(8);
    let matchups =
        generate_bracket(&mut store, &ctx, BracketType::SingleElimination, &NO_SHUFFLE).unwrap();

    // Only one match is played; everyone else still gets a zero-record row.
    let first = &matchups[0];
    let winner = first.entrants.side_a();
    record_result(&mut store, first.id, Some(1), Some(0), winner, at(1)).unwrap();

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let rows: Vec<Standing> = store
        .standings(ctx.tournament.tournament_id)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(rows.len(), 8);
    let ranks: Vec<u32> = rows.iter().map(|s| s.rank).collect();
    assert_eq!(ranks, (1..=8).collect::<Vec<u32>>());
    assert_eq!(rows[0].entrant.id(), winner.unwrap());
    assert!(rows.iter().skip(1).all(|s| s.points == 0));
}

#[test]
fn forfeited_matches_do_not_count_toward_the_record() {
    let mut store = TournamentStore::new();
    let ctx = team_event(2);
    let matchups =
        generate_bracket(&mut store, &ctx, BracketType::RoundRobin, &NO_SHUFFLE).unwrap();
    set_status(&mut store, matchups[0].id, MatchupStatus::Forfeited, at(1)).unwrap();

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let rows: Vec<Standing> = store
        .standings(ctx.tournament.tournament_id)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!((row.wins, row.losses, row.draws, row.points), (0, 0, 0, 0));
        assert_eq!(row.win_rate, 0.0);
    }
}

#[test]
fn residual_ties_order_by_entrant_id() {
    let mut store = TournamentStore::new();
    let ctx = team_event(2);
    let matchups =
        generate_bracket(&mut store, &ctx, BracketType::RoundRobin, &NO_SHUFFLE).unwrap();
    record_result(&mut store, matchups[0].id, Some(1), Some(1), None, at(1)).unwrap();

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let rows: Vec<Standing> = store
        .standings(ctx.tournament.tournament_id)
        .into_iter()
        .cloned()
        .collect();

    // Identical records: the lower id ranks first, deterministically.
    let mut expected = ctx.event_entrants.clone();
    expected.sort();
    let actual: Vec<Uuid> = rows.iter().map(|s| s.entrant.id()).collect();
    assert_eq!(actual, expected);
    assert!(rows.iter().all(|s| s.draws == 1 && s.points == 1));
}

#[test]
fn recalculation_replaces_previous_rows() {
    let mut store = TournamentStore::new();
    let ctx = team_event(3);
    let matchups =
        generate_bracket(&mut store, &ctx, BracketType::RoundRobin, &NO_SHUFFLE).unwrap();

    calculate_standings(&mut store, &ctx.tournament).unwrap();
    let before = store.standings(ctx.tournament.tournament_id).len();

    let playable: Vec<Uuid> = matchups
        .iter()
        .filter(|m| m.status == MatchupStatus::Pending)
        .map(|m| m.id)
        .collect();
    for (i, id) in playable.iter().enumerate() {
        let winner = store.matchup(*id).unwrap().entrants.side_a();
        record_result(&mut store, *id, Some(5), Some(3), winner, at(i as u32 + 1)).unwrap();
    }
    calculate_standings(&mut store, &ctx.tournament).unwrap();

    let rows = store.standings(ctx.tournament.tournament_id);
    assert_eq!(rows.len(), before); // one row per entrant, not accumulated
    assert!(rows.iter().any(|s| s.wins > 0));
}
