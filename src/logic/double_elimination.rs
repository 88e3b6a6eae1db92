//! Double elimination: winners bracket, heuristic losers bracket, grand final.

use std::cmp::max;

use uuid::Uuid;

use crate::logic::single_elimination;
use crate::models::{Entrants, EventContext, MatchStage, Matchup};

/// Build a full double-elimination bracket.
///
/// The winners bracket is a plain single-elimination bracket. The losers
/// bracket is sized heuristically from it: `max(1, winners rounds - 1)` rounds,
/// round `lr` holding `max(1, round-1 matches / 2^(lr-1))` matches. This is a
/// deliberate approximation of a textbook losers bracket; downstream code
/// depends on the exact match counts it produces, so keep it as is.
pub(crate) fn build(ctx: &EventContext, entrants: &[Uuid]) -> Vec<Matchup> {
    let mode = ctx.tournament.mode;
    let tournament_id = ctx.tournament.tournament_id;
    let event_id = ctx.event_id;

    let mut winners = single_elimination::build_rounds(ctx, entrants);
    let winners_round_count = winners.len();
    let round_1_count = winners[0].len();

    let losers_round_count = max(1, winners_round_count.saturating_sub(1));
    let mut losers: Vec<Vec<Matchup>> = (1..=losers_round_count)
        .map(|lr| {
            let count = max(1, round_1_count >> (lr - 1));
            (0..count)
                .map(|pos| {
                    Matchup::new(
                        tournament_id,
                        event_id,
                        lr as u32,
                        pos as u32 + 1,
                        MatchStage::Losers,
                        Entrants::empty(mode),
                    )
                })
                .collect()
        })
        .collect();
    single_elimination::link_rounds(&mut losers);

    // Each winners-round match drops its loser into the losers round with the
    // same index, same position clamped to that round's last match; rounds
    // past the losers bracket fall back to the first match of losers round 1.
    for (ri, round) in winners.iter_mut().enumerate() {
        for (pos, m) in round.iter_mut().enumerate() {
            let target = match losers.get(ri) {
                Some(lround) => lround[pos.min(lround.len() - 1)].id,
                None => losers[0][0].id,
            };
            m.loser_next_match_id = Some(target);
        }
    }

    let grand_final_round = max(winners_round_count, losers_round_count) as u32 + 1;
    let grand_final = Matchup::new(
        tournament_id,
        event_id,
        grand_final_round,
        1,
        MatchStage::GrandFinal,
        Entrants::empty(mode),
    );

    // Winners final feeds the grand final; its loser gets a last-chance entry
    // into losers round 1.
    if let Some(final_match) = winners.last_mut().and_then(|round| round.first_mut()) {
        final_match.next_match_id = Some(grand_final.id);
        final_match.loser_next_match_id = Some(losers[0][0].id);
    }

    // The losers-bracket final feeds the grand final as well.
    if let Some(last_round) = losers.last_mut() {
        for m in last_round.iter_mut() {
            m.next_match_id = Some(grand_final.id);
        }
    }

    winners
        .into_iter()
        .flatten()
        .chain(losers.into_iter().flatten())
        .chain(std::iter::once(grand_final))
        .collect()
}
