//! Single elimination: power-of-two padding, bye seeding, forward linkage.

use uuid::Uuid;

use crate::models::{Entrants, EventContext, MatchStage, Matchup};

/// Build all winners-bracket rounds for the entrant list, linked and grouped
/// per round (round index 0 is round 1).
///
/// 1. Pad entrants with null placeholders up to the next power of two.
/// 2. Round 1: pair consecutive slots; a pair with an absent side is a bye.
/// 3. Later rounds: placeholder matches, halving each round down to the final.
/// 4. Link match `pos` in round `r` to match `pos / 2` in round `r + 1`.
pub(crate) fn build_rounds(ctx: &EventContext, entrants: &[Uuid]) -> Vec<Vec<Matchup>> {
    let mode = ctx.tournament.mode;
    let tournament_id = ctx.tournament.tournament_id;
    let event_id = ctx.event_id;

    let size = entrants.len().next_power_of_two();
    let mut slots: Vec<Option<Uuid>> = entrants.iter().copied().map(Some).collect();
    slots.resize(size, None);

    let mut rounds: Vec<Vec<Matchup>> = Vec::new();
    let round_1: Vec<Matchup> = slots
        .chunks(2)
        .enumerate()
        .map(|(pos, pair)| {
            Matchup::new(
                tournament_id,
                event_id,
                1,
                pos as u32 + 1,
                MatchStage::Winners,
                Entrants::pair(mode, pair[0], pair[1]),
            )
        })
        .collect();
    rounds.push(round_1);

    let mut previous = size / 2;
    let mut round_number = 2;
    while previous > 1 {
        let count = previous / 2;
        let round: Vec<Matchup> = (0..count)
            .map(|pos| {
                Matchup::new(
                    tournament_id,
                    event_id,
                    round_number,
                    pos as u32 + 1,
                    MatchStage::Winners,
                    Entrants::empty(mode),
                )
            })
            .collect();
        rounds.push(round);
        previous = count;
        round_number += 1;
    }

    link_rounds(&mut rounds);
    rounds
}

/// Canonical advancement rule: match `pos` in round `r` feeds match
/// `pos / 2` in round `r + 1`; the last round keeps `next_match_id = None`.
pub(crate) fn link_rounds(rounds: &mut [Vec<Matchup>]) {
    for r in 0..rounds.len().saturating_sub(1) {
        let next_ids: Vec<Uuid> = rounds[r + 1].iter().map(|m| m.id).collect();
        for (pos, m) in rounds[r].iter_mut().enumerate() {
            m.next_match_id = Some(next_ids[pos / 2]);
        }
    }
}

pub(crate) fn build(ctx: &EventContext, entrants: &[Uuid]) -> Vec<Matchup> {
    build_rounds(ctx, entrants).into_iter().flatten().collect()
}
