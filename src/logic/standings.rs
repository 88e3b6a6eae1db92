//! Standings: destructive rebuild of per-entrant records from completed matchups.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{EngineError, EntrantRef, Standing, TournamentContext};
use crate::store::TournamentStore;

/// Points awarded per win and per draw; losses award nothing.
const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
    points: u32,
}

/// Recompute all standing rows for the tournament from scratch.
///
/// Only `completed` matchups count toward the record: byes never count as
/// played, and forfeits/cancellations/no-shows are excluded entirely (a
/// forfeit does not award the opposing side a win). Entrants appearing
/// anywhere in the bracket still receive a zero-record row so every entrant
/// is ranked.
pub fn calculate_standings(
    store: &mut TournamentStore,
    ctx: &TournamentContext,
) -> Result<(), EngineError> {
    let tournament_id = ctx.tournament_id;

    let mut tallies: HashMap<Uuid, Tally> = HashMap::new();
    for m in store.tournament_matchups(tournament_id) {
        for side in [m.entrants.side_a(), m.entrants.side_b()].into_iter().flatten() {
            tallies.entry(side).or_default();
        }
    }

    for m in store.completed_matchups(tournament_id) {
        match m.winner_id {
            Some(winner) => {
                if !m.entrants.contains(winner) {
                    return Err(EngineError::InvalidWinner {
                        matchup: m.id,
                        winner,
                    });
                }
                let t = tallies.entry(winner).or_default();
                t.wins += 1;
                t.points += WIN_POINTS;
                if let Some(loser) = m.entrants.opponent_of(winner) {
                    tallies.entry(loser).or_default().losses += 1;
                }
            }
            // Completed with no winner is a draw for both sides.
            None => {
                for side in [m.entrants.side_a(), m.entrants.side_b()].into_iter().flatten() {
                    let t = tallies.entry(side).or_default();
                    t.draws += 1;
                    t.points += DRAW_POINTS;
                }
            }
        }
    }

    let mut records: Vec<(Uuid, Tally)> = tallies.into_iter().collect();
    // Points descending, wins descending; entrant id ascending keeps residual
    // ties in a stable order.
    records.sort_by(|(a_id, a), (b_id, b)| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(a_id.cmp(b_id))
    });

    let rows: Vec<Standing> = records
        .into_iter()
        .enumerate()
        .map(|(i, (id, t))| Standing {
            tournament_id,
            entrant: EntrantRef::new(ctx.mode, id),
            wins: t.wins,
            losses: t.losses,
            draws: t.draws,
            points: t.points,
            win_rate: win_rate(t.wins, t.losses, t.draws),
            rank: i as u32 + 1,
        })
        .collect();

    log::debug!(
        "Rebuilt {} standing(s) for tournament {}",
        rows.len(),
        tournament_id
    );
    store.replace_standings(tournament_id, rows);
    Ok(())
}

/// wins / matches played * 100, rounded to two decimals; 0 with no matches.
fn win_rate(wins: u32, losses: u32, draws: u32) -> f64 {
    let played = wins + losses + draws;
    if played == 0 {
        return 0.0;
    }
    let raw = wins as f64 / played as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
