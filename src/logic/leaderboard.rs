//! Leaderboard: standings enriched with per-entrant match history and stats.

use uuid::Uuid;

use crate::models::{
    EngineError, Entrants, LeaderboardEntry, LeaderboardStats, MatchHistoryEntry, MatchResult,
    Matchup, Standing, TournamentContext,
};
use crate::store::TournamentStore;

/// Rebuild all leaderboard rows for the tournament from its standing rows.
/// Run after `calculate_standings`; record fields are carried forward
/// unchanged, history is most-recent-first.
pub fn build_leaderboard(
    store: &mut TournamentStore,
    ctx: &TournamentContext,
) -> Result<(), EngineError> {
    let tournament_id = ctx.tournament_id;
    let standings: Vec<Standing> = store
        .standings(tournament_id)
        .into_iter()
        .cloned()
        .collect();

    let mut rows = Vec::with_capacity(standings.len());
    for standing in &standings {
        let entrant_id = standing.entrant.id();
        let match_history: Vec<MatchHistoryEntry> = store
            .completed_matchups_for(tournament_id, entrant_id)
            .into_iter()
            .map(|m| history_entry(ctx, m, entrant_id))
            .collect();

        let matches_played = standing.matches_played();
        let avg_points_per_match = if matches_played == 0 {
            0.0
        } else {
            standing.points as f64 / matches_played as f64
        };

        rows.push(LeaderboardEntry {
            tournament_id,
            entrant: standing.entrant,
            rank: standing.rank,
            wins: standing.wins,
            losses: standing.losses,
            draws: standing.draws,
            points: standing.points,
            win_rate: standing.win_rate,
            matches_played,
            match_history,
            stats: LeaderboardStats {
                avg_points_per_match,
            },
        });
    }

    log::debug!(
        "Rebuilt {} leaderboard row(s) for tournament {}",
        rows.len(),
        tournament_id
    );
    store.replace_leaderboard(tournament_id, rows);
    Ok(())
}

/// One history line from this entrant's perspective. Scores are carried only
/// for team-based matches, oriented entrant-first.
fn history_entry(ctx: &TournamentContext, m: &Matchup, entrant_id: Uuid) -> MatchHistoryEntry {
    let opponent_id = m.entrants.opponent_of(entrant_id);
    let opponent_name = opponent_id
        .map(|id| ctx.entrant_name(id))
        .unwrap_or_default();

    let result = match m.winner_id {
        Some(winner) if winner == entrant_id => MatchResult::Win,
        Some(_) => MatchResult::Loss,
        None => MatchResult::Draw,
    };

    let (entrant_score, opponent_score) = match m.entrants {
        Entrants::TeamPair { team_a, .. } => {
            if team_a == Some(entrant_id) {
                (m.team_a_score, m.team_b_score)
            } else {
                (m.team_b_score, m.team_a_score)
            }
        }
        Entrants::UserPair { .. } => (None, None),
    };

    MatchHistoryEntry {
        opponent_id,
        opponent_name,
        result,
        entrant_score,
        opponent_score,
        completed_at: m.completed_at,
    }
}
