//! Tournament/event contexts, modes, and EngineError.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::matchup::{MatchupId, MatchupStatus};

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;
/// Unique identifier for an event (one bracket instance within a tournament).
pub type EventId = Uuid;
/// Unique identifier for a team (supplied externally, never created here).
pub type TeamId = Uuid;
/// Unique identifier for an individual user (supplied externally).
pub type UserId = Uuid;

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Fewer than two distinct entrants could be collected for the event.
    NotEnoughEntrants { field: &'static str, found: usize },
    /// Collected entrant ids that do not resolve to a known team/user record (sorted).
    UnknownEntrants(Vec<Uuid>),
    /// Bracket type string is not one of the supported kinds.
    UnknownBracketType(String),
    /// No matchup with this id in the store.
    MatchupNotFound(MatchupId),
    /// The requested status change is not allowed by the matchup state machine.
    InvalidStatusTransition { from: MatchupStatus, to: MatchupStatus },
    /// A recorded winner id that is neither entrant slot of the matchup.
    InvalidWinner { matchup: MatchupId, winner: Uuid },
    /// A forward link that does not point at a later match in the same scope.
    InvalidLinkage { from: MatchupId },
    /// The matchup has no decided winner yet, so there is nothing to advance.
    MatchupUndecided(MatchupId),
    /// The successor matchup already has both entrant slots filled.
    NoOpenSlot(MatchupId),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotEnoughEntrants { field, found } => {
                write!(f, "Need at least 2 distinct {} to generate a bracket (found {})", field, found)
            }
            EngineError::UnknownEntrants(ids) => {
                let ids: Vec<String> = ids.iter().map(Uuid::to_string).collect();
                write!(f, "Entrant ids do not resolve to existing records: {}", ids.join(", "))
            }
            EngineError::UnknownBracketType(s) => write!(f, "Unknown bracket type: {}", s),
            EngineError::MatchupNotFound(id) => write!(f, "Matchup {} not found", id),
            EngineError::InvalidStatusTransition { from, to } => {
                write!(f, "Matchup status cannot change from {:?} to {:?}", from, to)
            }
            EngineError::InvalidWinner { matchup, winner } => {
                write!(f, "Winner {} is not an entrant of matchup {}", winner, matchup)
            }
            EngineError::InvalidLinkage { from } => {
                write!(f, "Matchup {} links to a match that is not later in the bracket", from)
            }
            EngineError::MatchupUndecided(id) => write!(f, "Matchup {} has no decided winner", id),
            EngineError::NoOpenSlot(id) => write!(f, "Matchup {} has no open entrant slot", id),
        }
    }
}

impl std::error::Error for EngineError {}

/// How entrants compete: as teams or as individual users.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentMode {
    #[default]
    TeamVsTeam,
    FreeForAll,
}

/// Bracket construction scheme for one event.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl FromStr for BracketType {
    type Err = EngineError;

    /// Parse the wire string used by callers; anything unrecognized is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_elimination" => Ok(BracketType::SingleElimination),
            "double_elimination" => Ok(BracketType::DoubleElimination),
            "round_robin" => Ok(BracketType::RoundRobin),
            other => Err(EngineError::UnknownBracketType(other.to_string())),
        }
    }
}

/// Whether a tournament participant record is a team or an individual.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantType {
    Team,
    Individual,
}

/// Registration status of a tournament participant record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Pending,
    Approved,
    Confirmed,
    Rejected,
    Withdrawn,
}

impl ParticipantStatus {
    /// Statuses that count toward bracket entry.
    pub fn is_eligible(self) -> bool {
        matches!(
            self,
            ParticipantStatus::Approved | ParticipantStatus::Confirmed | ParticipantStatus::Pending
        )
    }
}

/// One tournament-level registration record (team or individual).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub entrant_id: Uuid,
    pub participant_type: ParticipantType,
    pub status: ParticipantStatus,
}

impl Participant {
    pub fn new(entrant_id: Uuid, participant_type: ParticipantType, status: ParticipantStatus) -> Self {
        Self {
            entrant_id,
            participant_type,
            status,
        }
    }
}

/// Tournament-scoped context supplied by the surrounding application.
///
/// The roster is the set of known team/user records for the tournament
/// (id to display name); entrant ids that are not in it fail validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentContext {
    pub tournament_id: TournamentId,
    pub mode: TournamentMode,
    pub roster: HashMap<Uuid, String>,
}

impl TournamentContext {
    pub fn new(tournament_id: TournamentId, mode: TournamentMode) -> Self {
        Self {
            tournament_id,
            mode,
            roster: HashMap::new(),
        }
    }

    /// Register an external team/user record so entrant ids can resolve against it.
    pub fn add_roster_entry(&mut self, id: Uuid, name: impl Into<String>) {
        self.roster.insert(id, name.into());
    }

    /// Display name for an entrant; falls back to the rendered id for unknown records.
    pub fn entrant_name(&self, id: Uuid) -> String {
        self.roster
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

/// Event-scoped context: one bracket instance plus its entrant sources.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventContext {
    pub tournament: TournamentContext,
    pub event_id: EventId,
    /// Entrant ids associated directly with the event (priority source).
    pub event_entrants: Vec<Uuid>,
    /// Tournament-level participant records (fallback source).
    pub participants: Vec<Participant>,
}

impl EventContext {
    pub fn new(tournament: TournamentContext, event_id: EventId) -> Self {
        Self {
            tournament,
            event_id,
            event_entrants: Vec::new(),
            participants: Vec::new(),
        }
    }
}
