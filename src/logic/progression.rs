//! Match progression: result recording, status transitions, advancement.
//!
//! This is the seam the external scoring flow calls into; the engine itself
//! never invents scores or outcomes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{EngineError, MatchupId, MatchupStatus};
use crate::store::TournamentStore;

/// Record a played result: scores, winner (None for a draw), and completion
/// time. The matchup must be allowed to transition into `completed`, and a
/// non-null winner must be one of its entrants.
pub fn record_result(
    store: &mut TournamentStore,
    matchup_id: MatchupId,
    team_a_score: Option<i32>,
    team_b_score: Option<i32>,
    winner_id: Option<Uuid>,
    completed_at: DateTime<Utc>,
) -> Result<(), EngineError> {
    let m = store
        .matchup_mut(matchup_id)
        .ok_or(EngineError::MatchupNotFound(matchup_id))?;
    if !m.status.can_transition_to(MatchupStatus::Completed) {
        return Err(EngineError::InvalidStatusTransition {
            from: m.status,
            to: MatchupStatus::Completed,
        });
    }
    if let Some(winner) = winner_id {
        if !m.entrants.contains(winner) {
            return Err(EngineError::InvalidWinner {
                matchup: matchup_id,
                winner,
            });
        }
    }
    m.team_a_score = team_a_score;
    m.team_b_score = team_b_score;
    m.winner_id = winner_id;
    m.status = MatchupStatus::Completed;
    m.completed_at = Some(completed_at);
    Ok(())
}

/// Move a matchup through its lifecycle (scheduled, in progress, forfeited,
/// cancelled, no-show). Stamps the matching timestamp for the new state.
pub fn set_status(
    store: &mut TournamentStore,
    matchup_id: MatchupId,
    status: MatchupStatus,
    at: DateTime<Utc>,
) -> Result<(), EngineError> {
    let m = store
        .matchup_mut(matchup_id)
        .ok_or(EngineError::MatchupNotFound(matchup_id))?;
    if !m.status.can_transition_to(status) {
        return Err(EngineError::InvalidStatusTransition {
            from: m.status,
            to: status,
        });
    }
    match status {
        MatchupStatus::Scheduled => m.scheduled_at = Some(at),
        MatchupStatus::InProgress => m.started_at = Some(at),
        s if s.is_terminal() => m.completed_at = Some(at),
        _ => {}
    }
    m.status = status;
    Ok(())
}

/// Advance a decided matchup: the winner into its successor's first open slot,
/// and (double elimination) the loser into the loser-successor.
///
/// A bye advances its sole entrant; a bye with both slots absent has nobody to
/// advance and is a no-op. A pending or drawn matchup cannot advance.
pub fn advance_winner(
    store: &mut TournamentStore,
    matchup_id: MatchupId,
) -> Result<(), EngineError> {
    let (winner, loser, next, loser_next) = {
        let m = store
            .matchup(matchup_id)
            .ok_or(EngineError::MatchupNotFound(matchup_id))?;
        match m.decided_winner() {
            Some(winner) => (winner, m.decided_loser(), m.next_match_id, m.loser_next_match_id),
            None if m.status == MatchupStatus::Bye => return Ok(()),
            None => return Err(EngineError::MatchupUndecided(matchup_id)),
        }
    };

    if let Some(next_id) = next {
        fill_slot(store, next_id, winner)?;
    }
    if let (Some(loser_next_id), Some(loser)) = (loser_next, loser) {
        fill_slot(store, loser_next_id, loser)?;
    }
    Ok(())
}

/// Administrative dispute flag; never computed by the engine.
pub fn flag_dispute(
    store: &mut TournamentStore,
    matchup_id: MatchupId,
    reason: impl Into<String>,
    at: DateTime<Utc>,
) -> Result<(), EngineError> {
    let m = store
        .matchup_mut(matchup_id)
        .ok_or(EngineError::MatchupNotFound(matchup_id))?;
    m.is_disputed = true;
    m.dispute_reason = Some(reason.into());
    m.disputed_at = Some(at);
    Ok(())
}

/// Put an entrant into the successor's first open slot. Advancing the same
/// entrant twice is a no-op; a full successor is an integrity error.
fn fill_slot(
    store: &mut TournamentStore,
    matchup_id: MatchupId,
    entrant: Uuid,
) -> Result<(), EngineError> {
    let m = store
        .matchup_mut(matchup_id)
        .ok_or(EngineError::MatchupNotFound(matchup_id))?;
    if m.entrants.contains(entrant) {
        return Ok(());
    }
    if !m.entrants.fill_open_slot(entrant) {
        return Err(EngineError::NoOpenSlot(matchup_id));
    }
    Ok(())
}
