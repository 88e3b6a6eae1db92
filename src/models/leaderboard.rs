//! Leaderboard rows: standings enriched with match history and summary stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::standing::EntrantRef;
use crate::models::tournament::TournamentId;

/// Outcome of one matchup from a single entrant's perspective.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

/// One entry in an entrant's match history (most recent first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub opponent_id: Option<Uuid>,
    pub opponent_name: String,
    pub result: MatchResult,
    /// This entrant's score (team-based tournaments only).
    pub entrant_score: Option<i32>,
    /// The opponent's score (team-based tournaments only).
    pub opponent_score: Option<i32>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Summary statistics carried on a leaderboard row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardStats {
    pub avg_points_per_match: f64,
}

/// One row per standing, rebuilt wholesale on every recalculation.
///
/// Record fields are carried forward from the Standing unchanged; the history
/// list is uncapped (entrant match counts are small, tens at most).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub tournament_id: TournamentId,
    pub entrant: EntrantRef,
    pub rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: u32,
    pub win_rate: f64,
    pub matches_played: u32,
    pub match_history: Vec<MatchHistoryEntry>,
    pub stats: LeaderboardStats,
}
