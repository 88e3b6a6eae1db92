//! Round robin: circle-method schedule where every pair meets exactly once.

use uuid::Uuid;

use crate::models::{Entrants, EventContext, MatchStage, Matchup};

/// Build a full round-robin schedule.
///
/// 1. Odd entrant counts get one null rotation partner; its pairings are byes.
/// 2. n - 1 rounds: position `i` meets position `n - 1 - i` each round.
/// 3. After each round, rotate every position except the fixed first one by
///    moving the last element into the second slot.
///
/// No forward linkage: round robin has no advancement.
pub(crate) fn build(ctx: &EventContext, entrants: &[Uuid]) -> Vec<Matchup> {
    let mode = ctx.tournament.mode;
    let tournament_id = ctx.tournament.tournament_id;
    let event_id = ctx.event_id;

    let mut ring: Vec<Option<Uuid>> = entrants.iter().copied().map(Some).collect();
    if ring.len() % 2 != 0 {
        ring.push(None);
    }
    let n = ring.len();
    let rounds = n - 1;

    let mut matchups = Vec::with_capacity(rounds * n / 2);
    for round in 1..=rounds {
        for i in 0..n / 2 {
            let pairing = Entrants::pair(mode, ring[i], ring[n - 1 - i]);
            matchups.push(Matchup::new(
                tournament_id,
                event_id,
                round as u32,
                i as u32 + 1,
                MatchStage::RoundRobin,
                pairing,
            ));
        }
        if let Some(last) = ring.pop() {
            ring.insert(1, last);
        }
    }
    matchups
}
