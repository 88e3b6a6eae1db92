//! Data structures for the engine: matchups, standings, leaderboards, contexts.

mod leaderboard;
mod matchup;
mod standing;
mod tournament;

pub use leaderboard::{LeaderboardEntry, LeaderboardStats, MatchHistoryEntry, MatchResult};
pub use matchup::{Entrants, MatchStage, Matchup, MatchupId, MatchupStatus};
pub use standing::{EntrantRef, Standing};
pub use tournament::{
    BracketType, EngineError, EventContext, EventId, Participant, ParticipantStatus,
    ParticipantType, TeamId, TournamentContext, TournamentId, TournamentMode, UserId,
};
