//! Bracket generation entry point: entrant collection, validation, dispatch.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::logic::{double_elimination, round_robin, single_elimination};
use crate::models::{
    BracketType, EngineError, EventContext, Matchup, MatchupId, ParticipantType, TournamentMode,
};
use crate::store::TournamentStore;

/// Options for bracket generation.
#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions {
    /// Randomize entrant order before slot assignment (the fairness mechanism).
    /// No seeding is specified, so shuffled runs are not reproducible.
    pub shuffle: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

/// Generate the full matchup set for one event and store it, replacing any
/// previous bracket for the (tournament, event) scope.
///
/// All validation happens before anything is written; a failed generation
/// leaves the previous bracket untouched. Returns the stored matchups ordered
/// by stage, then round, then match number.
pub fn generate_bracket(
    store: &mut TournamentStore,
    ctx: &EventContext,
    bracket_type: BracketType,
    options: &GenerateOptions,
) -> Result<Vec<Matchup>, EngineError> {
    let mut entrants = collect_entrants(ctx)?;
    if options.shuffle {
        entrants.shuffle(&mut rand::thread_rng());
    }

    let mut matchups = match bracket_type {
        BracketType::SingleElimination => single_elimination::build(ctx, &entrants),
        BracketType::DoubleElimination => double_elimination::build(ctx, &entrants),
        BracketType::RoundRobin => round_robin::build(ctx, &entrants),
    };
    matchups.sort_by_key(|m| (m.stage, m.round_number, m.match_number));
    validate_linkage(&matchups)?;

    log::info!(
        "Generated {} matchup(s) ({:?}) for event {} with {} entrant(s)",
        matchups.len(),
        bracket_type,
        ctx.event_id,
        entrants.len()
    );
    store.replace_event_matchups(ctx.tournament.tournament_id, ctx.event_id, matchups.clone());
    Ok(matchups)
}

/// Collect distinct entrant ids for the event, in priority order: the event's
/// own associations first, then eligible tournament participant records of the
/// matching type. Requires at least 2 entrants, all resolving in the roster.
fn collect_entrants(ctx: &EventContext) -> Result<Vec<Uuid>, EngineError> {
    let wanted = match ctx.tournament.mode {
        TournamentMode::TeamVsTeam => ParticipantType::Team,
        TournamentMode::FreeForAll => ParticipantType::Individual,
    };

    let mut ids = dedup_preserving_order(ctx.event_entrants.iter().copied());
    if ids.is_empty() {
        ids = dedup_preserving_order(
            ctx.participants
                .iter()
                .filter(|p| p.participant_type == wanted && p.status.is_eligible())
                .map(|p| p.entrant_id),
        );
    }

    if ids.len() < 2 {
        return Err(EngineError::NotEnoughEntrants {
            field: "participants",
            found: ids.len(),
        });
    }

    let mut missing: Vec<Uuid> = ids
        .iter()
        .copied()
        .filter(|id| !ctx.tournament.roster.contains_key(id))
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(EngineError::UnknownEntrants(missing));
    }

    Ok(ids)
}

fn dedup_preserving_order(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

/// Structural check run before the store is touched: every winner link must
/// point at an existing match in a strictly later round (no cycles), every
/// loser link at a match on the losers track.
fn validate_linkage(matchups: &[Matchup]) -> Result<(), EngineError> {
    let by_id: HashMap<MatchupId, &Matchup> = matchups.iter().map(|m| (m.id, m)).collect();
    for m in matchups {
        if let Some(next) = m.next_match_id {
            let target = by_id
                .get(&next)
                .ok_or(EngineError::InvalidLinkage { from: m.id })?;
            if target.round_number <= m.round_number {
                return Err(EngineError::InvalidLinkage { from: m.id });
            }
        }
        if let Some(loser_next) = m.loser_next_match_id {
            let target = by_id
                .get(&loser_next)
                .ok_or(EngineError::InvalidLinkage { from: m.id })?;
            if target.stage != crate::models::MatchStage::Losers {
                return Err(EngineError::InvalidLinkage { from: m.id });
            }
        }
    }
    Ok(())
}
