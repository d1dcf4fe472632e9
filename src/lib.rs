//! Distle
//!
//! A word deduction game scored by edit distance, plus a solver that plays it.
//! Every guess is answered with the restricted Damerau-Levenshtein distance to
//! the secret and the operations (replace, transpose, insert, delete) that
//! turn the guess into the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use distle::game::Game;
//! use distle::solver::{Player, StrategyType};
//! use distle::wordlists::Dictionary;
//!
//! let dictionary = Arc::new(Dictionary::default_words());
//! let game = Game::new(Arc::clone(&dictionary), "hack", dictionary.len())?;
//!
//! let mut player = Player::new(StrategyType::from_name("entropy", None));
//! let result = game.play(&mut player);
//! assert!(result.won());
//! # Ok::<_, distle::DistleError>(())
//! ```

// Core domain types
pub mod core;

pub mod error;

// Game orchestration
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{DistleError, Result};
