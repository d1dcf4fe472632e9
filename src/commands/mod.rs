//! Command implementations

pub mod assist;
pub mod distance;
pub mod game_show;
pub mod play;
pub mod solve;

pub use assist::{AssistCommand, parse_command, run_assist};
pub use distance::{DistanceResult, analyze_distance};
pub use game_show::{GameShowConfig, GameShowStatistics, run_game_show};
pub use play::run_play;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
