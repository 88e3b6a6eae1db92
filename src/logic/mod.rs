//! Engine operations: bracket generation, progression, standings, leaderboard.

mod bracket;
mod double_elimination;
mod leaderboard;
mod progression;
mod round_robin;
mod single_elimination;
mod standings;

pub use bracket::{generate_bracket, GenerateOptions};
pub use leaderboard::build_leaderboard;
pub use progression::{advance_winner, flag_dispute, record_result, set_status};
pub use standings::calculate_standings;
