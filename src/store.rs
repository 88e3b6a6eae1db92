//! In-memory arena owning all matchup, standing, and leaderboard rows.
//!
//! The engine's write operations are all-or-nothing per scope: callers build
//! and validate a complete replacement set first, then swap it in with a
//! single `replace_*` call. Nothing here blocks or retries; serializing
//! concurrent writers for the same scope is the caller's responsibility.

use uuid::Uuid;

use crate::models::{
    EventId, LeaderboardEntry, Matchup, MatchupId, Standing, TournamentId,
};

/// Owns every row the engine produces, across all tournaments and events.
#[derive(Clone, Debug, Default)]
pub struct TournamentStore {
    matchups: Vec<Matchup>,
    standings: Vec<Standing>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete all matchups for the (tournament, event) scope and insert the
    /// replacement set. Regeneration is destructive: it always starts clean.
    pub fn replace_event_matchups(
        &mut self,
        tournament_id: TournamentId,
        event_id: EventId,
        rows: Vec<Matchup>,
    ) {
        self.matchups
            .retain(|m| !(m.tournament_id == tournament_id && m.event_id == event_id));
        self.matchups.extend(rows);
    }

    pub fn matchup(&self, id: MatchupId) -> Option<&Matchup> {
        self.matchups.iter().find(|m| m.id == id)
    }

    pub(crate) fn matchup_mut(&mut self, id: MatchupId) -> Option<&mut Matchup> {
        self.matchups.iter_mut().find(|m| m.id == id)
    }

    /// All matchups of one event, in stored (stage/round/number) order.
    pub fn event_matchups(&self, tournament_id: TournamentId, event_id: EventId) -> Vec<&Matchup> {
        self.matchups
            .iter()
            .filter(|m| m.tournament_id == tournament_id && m.event_id == event_id)
            .collect()
    }

    /// All matchups of one tournament across its events.
    pub fn tournament_matchups(&self, tournament_id: TournamentId) -> Vec<&Matchup> {
        self.matchups
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .collect()
    }

    /// Completed matchups of one tournament (byes and every other status excluded).
    pub fn completed_matchups(&self, tournament_id: TournamentId) -> Vec<&Matchup> {
        self.matchups
            .iter()
            .filter(|m| m.tournament_id == tournament_id && m.is_completed())
            .collect()
    }

    /// Completed matchups involving one entrant, most recently completed first.
    pub fn completed_matchups_for(
        &self,
        tournament_id: TournamentId,
        entrant_id: Uuid,
    ) -> Vec<&Matchup> {
        let mut rows: Vec<&Matchup> = self
            .matchups
            .iter()
            .filter(|m| {
                m.tournament_id == tournament_id
                    && m.is_completed()
                    && m.entrants.contains(entrant_id)
            })
            .collect();
        rows.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        rows
    }

    /// Delete all standing rows for the tournament and insert the replacement set.
    pub fn replace_standings(&mut self, tournament_id: TournamentId, rows: Vec<Standing>) {
        self.standings.retain(|s| s.tournament_id != tournament_id);
        self.standings.extend(rows);
    }

    /// Standing rows for the tournament, ordered by rank ascending.
    pub fn standings(&self, tournament_id: TournamentId) -> Vec<&Standing> {
        let mut rows: Vec<&Standing> = self
            .standings
            .iter()
            .filter(|s| s.tournament_id == tournament_id)
            .collect();
        rows.sort_by_key(|s| s.rank);
        rows
    }

    /// Delete all leaderboard rows for the tournament and insert the replacement set.
    pub fn replace_leaderboard(&mut self, tournament_id: TournamentId, rows: Vec<LeaderboardEntry>) {
        self.leaderboard.retain(|l| l.tournament_id != tournament_id);
        self.leaderboard.extend(rows);
    }

    /// Leaderboard rows for the tournament, ordered by rank ascending.
    pub fn leaderboard(&self, tournament_id: TournamentId) -> Vec<&LeaderboardEntry> {
        let mut rows: Vec<&LeaderboardEntry> = self
            .leaderboard
            .iter()
            .filter(|l| l.tournament_id == tournament_id)
            .collect();
        rows.sort_by_key(|l| l.rank);
        rows
    }
}
