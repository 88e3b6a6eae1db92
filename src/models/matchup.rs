//! Matchup, Entrants, MatchStage, and MatchupStatus for bracket matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::tournament::{EventId, TeamId, TournamentId, TournamentMode, UserId};

/// Unique identifier for a matchup.
pub type MatchupId = Uuid;

/// Named partition of a bracket's matches.
///
/// Variant order is the display/sort order within one event, so the grand
/// final always sorts after the winners and losers tracks.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Group,
    RoundRobin,
    Winners,
    Losers,
    Semis,
    Finals,
    GrandFinal,
}

/// Lifecycle state of a matchup.
///
/// `Bye` is terminal with an implicit winner (the sole non-null slot); it is
/// excluded from "matches played" analytics but still advances its entrant.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupStatus {
    #[default]
    Pending,
    Bye,
    Scheduled,
    InProgress,
    Completed,
    Forfeited,
    Cancelled,
    NoShow,
}

impl MatchupStatus {
    /// Terminal states never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchupStatus::Bye
                | MatchupStatus::Completed
                | MatchupStatus::Forfeited
                | MatchupStatus::Cancelled
                | MatchupStatus::NoShow
        )
    }

    /// Whether the state machine allows moving from `self` to `next`.
    /// `Bye` is only ever assigned at generation time, never via a transition.
    pub fn can_transition_to(self, next: MatchupStatus) -> bool {
        if next == MatchupStatus::Bye {
            return false;
        }
        match self {
            MatchupStatus::Pending => next != MatchupStatus::Pending,
            MatchupStatus::Scheduled => !matches!(next, MatchupStatus::Pending | MatchupStatus::Scheduled),
            MatchupStatus::InProgress => matches!(
                next,
                MatchupStatus::Completed
                    | MatchupStatus::Forfeited
                    | MatchupStatus::Cancelled
                    | MatchupStatus::NoShow
            ),
            _ => false,
        }
    }
}

/// The two sides of a matchup, tagged by tournament mode.
///
/// `None` in a slot denotes a bye (absent opponent) or a not-yet-advanced
/// entrant in a pre-created later round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrants {
    TeamPair {
        team_a: Option<TeamId>,
        team_b: Option<TeamId>,
    },
    UserPair {
        user_a: Option<UserId>,
        user_b: Option<UserId>,
    },
}

impl Entrants {
    /// Build the pair variant matching the tournament mode.
    pub fn pair(mode: TournamentMode, a: Option<Uuid>, b: Option<Uuid>) -> Self {
        match mode {
            TournamentMode::TeamVsTeam => Entrants::TeamPair { team_a: a, team_b: b },
            TournamentMode::FreeForAll => Entrants::UserPair { user_a: a, user_b: b },
        }
    }

    /// Empty pair for pre-created later-round matches.
    pub fn empty(mode: TournamentMode) -> Self {
        Self::pair(mode, None, None)
    }

    pub fn side_a(&self) -> Option<Uuid> {
        match *self {
            Entrants::TeamPair { team_a, .. } => team_a,
            Entrants::UserPair { user_a, .. } => user_a,
        }
    }

    pub fn side_b(&self) -> Option<Uuid> {
        match *self {
            Entrants::TeamPair { team_b, .. } => team_b,
            Entrants::UserPair { user_b, .. } => user_b,
        }
    }

    /// Whether this id occupies either slot.
    pub fn contains(&self, id: Uuid) -> bool {
        self.side_a() == Some(id) || self.side_b() == Some(id)
    }

    /// The other side relative to `id`, if `id` is one of the slots.
    pub fn opponent_of(&self, id: Uuid) -> Option<Uuid> {
        if self.side_a() == Some(id) {
            self.side_b()
        } else if self.side_b() == Some(id) {
            self.side_a()
        } else {
            None
        }
    }

    /// A pairing with at least one absent side.
    pub fn is_bye(&self) -> bool {
        self.side_a().is_none() || self.side_b().is_none()
    }

    /// The single present entrant of a bye pairing (None for a full pair or a double-null bye).
    pub fn sole_entrant(&self) -> Option<Uuid> {
        match (self.side_a(), self.side_b()) {
            (Some(id), None) => Some(id),
            (None, Some(id)) => Some(id),
            _ => None,
        }
    }

    /// Put `id` into the first open slot. Returns false when both slots are taken.
    pub fn fill_open_slot(&mut self, id: Uuid) -> bool {
        match self {
            Entrants::TeamPair { team_a, team_b } => fill_pair(team_a, team_b, id),
            Entrants::UserPair { user_a, user_b } => fill_pair(user_a, user_b, id),
        }
    }
}

fn fill_pair(a: &mut Option<Uuid>, b: &mut Option<Uuid>, id: Uuid) -> bool {
    if a.is_none() {
        *a = Some(id);
        true
    } else if b.is_none() {
        *b = Some(id);
        true
    } else {
        false
    }
}

/// A single match/bout between two entrants within one event's bracket.
///
/// Linkage fields are optional ids into the same event's matchup set (arena
/// style, no literal pointers); `next_match_id` must point at a later round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub tournament_id: TournamentId,
    pub event_id: EventId,
    /// 1-based; increases toward the final.
    pub round_number: u32,
    /// 1-based position within the round.
    pub match_number: u32,
    pub stage: MatchStage,
    pub entrants: Entrants,
    pub team_a_score: Option<i32>,
    pub team_b_score: Option<i32>,
    /// Winner entrant id. None means a draw when completed, undecided otherwise.
    pub winner_id: Option<Uuid>,
    pub status: MatchupStatus,
    pub is_disputed: bool,
    pub dispute_reason: Option<String>,
    pub disputed_at: Option<DateTime<Utc>>,
    /// Where the winner advances.
    pub next_match_id: Option<MatchupId>,
    /// Where the loser advances (double elimination only).
    pub loser_next_match_id: Option<MatchupId>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Matchup {
    /// Create a matchup in its initial state. A pairing with an absent side is
    /// a `Bye` immediately; everything else starts `Pending`.
    pub fn new(
        tournament_id: TournamentId,
        event_id: EventId,
        round_number: u32,
        match_number: u32,
        stage: MatchStage,
        entrants: Entrants,
    ) -> Self {
        let status = if entrants.is_bye() {
            MatchupStatus::Bye
        } else {
            MatchupStatus::Pending
        };
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            event_id,
            round_number,
            match_number,
            stage,
            entrants,
            team_a_score: None,
            team_b_score: None,
            winner_id: None,
            status,
            is_disputed: false,
            dispute_reason: None,
            disputed_at: None,
            next_match_id: None,
            loser_next_match_id: None,
            scheduled_at: None,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchupStatus::Completed
    }

    /// The entrant that advances along `next_match_id`: the recorded winner of
    /// a completed match, or the sole entrant of a bye.
    pub fn decided_winner(&self) -> Option<Uuid> {
        match self.status {
            MatchupStatus::Completed => self.winner_id,
            MatchupStatus::Bye => self.entrants.sole_entrant(),
            _ => None,
        }
    }

    /// The entrant that drops along `loser_next_match_id`, if decided and not a draw.
    pub fn decided_loser(&self) -> Option<Uuid> {
        let winner = self.decided_winner()?;
        self.entrants.opponent_of(winner)
    }
}
