//! Automated guessing
//!
//! Candidate pruning, guess selection strategies and the [`Player`] that
//! combines them.

mod candidates;
pub mod entropy;
mod player;
pub mod strategy;

pub use candidates::CandidateSet;
pub use player::Player;
pub use strategy::{
    EntropyStrategy, FirstStrategy, HybridStrategy, RandomStrategy, Strategy, StrategyType,
};
