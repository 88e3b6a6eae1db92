//! Tournament bracket generation and standings engine: library with models and engine logic.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_winner, build_leaderboard, calculate_standings, flag_dispute, generate_bracket,
    record_result, set_status, GenerateOptions,
};
pub use models::{
    BracketType, EngineError, EntrantRef, Entrants, EventContext, EventId, LeaderboardEntry,
    LeaderboardStats, MatchHistoryEntry, MatchResult, MatchStage, Matchup, MatchupId,
    MatchupStatus, Participant, ParticipantStatus, ParticipantType, Standing, TeamId,
    TournamentContext, TournamentId, TournamentMode, UserId,
};
pub use store::TournamentStore;
