//! Standing rows: per-entrant cumulative record within a tournament.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::tournament::{TeamId, TournamentId, TournamentMode, UserId};

/// The entrant a standing/leaderboard row belongs to, tagged by tournament
/// mode so team and user rows cannot be mixed up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrantRef {
    Team(TeamId),
    User(UserId),
}

impl EntrantRef {
    /// Tag an id with the variant matching the tournament mode.
    pub fn new(mode: TournamentMode, id: Uuid) -> Self {
        match mode {
            TournamentMode::TeamVsTeam => EntrantRef::Team(id),
            TournamentMode::FreeForAll => EntrantRef::User(id),
        }
    }

    pub fn id(&self) -> Uuid {
        match *self {
            EntrantRef::Team(id) => id,
            EntrantRef::User(id) => id,
        }
    }
}

/// One row per (tournament, entrant): wins/losses/draws/points plus derived
/// rank and win rate. Fully derived; deleted and rebuilt on every recalculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub tournament_id: TournamentId,
    pub entrant: EntrantRef,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: u32,
    /// 0-100, rounded to two decimals; 0 when no matches were played.
    pub win_rate: f64,
    /// 1-based, dense (no gaps), ties broken deterministically.
    pub rank: u32,
}

impl Standing {
    /// Matches counted toward the record (completed only; byes never count).
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
