//! Word solving command
//!
//! Plays one game against a known secret and records every step.

use crate::core::Feedback;
use crate::error::Result;
use crate::game::{Game, GameState, GuessOutcome, Guesser};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Player, Strategy};
use crate::wordlists::Dictionary;
use std::sync::Arc;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    pub const DEFAULT_MAX_GUESSES: usize = 10;

    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub state: GameState,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == GameState::Won
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    /// `None` when the guess was the secret
    pub feedback: Option<Feedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess over the candidates it was chosen from
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` with `player`, recording each guess
///
/// # Errors
///
/// Returns [`DistleError::InvalidWord`](crate::DistleError::InvalidWord) if
/// the target is not in the dictionary.
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    dictionary: Arc<Dictionary>,
    player: &mut Player<S>,
) -> Result<SolveResult> {
    let mut game = Game::new(Arc::clone(&dictionary), &config.target, config.max_guesses)?;
    player.reset(dictionary, config.max_guesses);

    let mut steps = Vec::new();

    while game.state() == GameState::AwaitingGuess {
        let candidates_before = player.candidates().len();

        let Some(guess) = player.next_guess() else {
            game.abandon();
            break;
        };

        // Metrics only make sense once the candidates have been narrowed
        let (entropy, expected_remaining) =
            if !player.history().is_empty() && candidates_before > 1 {
                let metrics = calculate_metrics(&guess, player.candidates().words());
                (Some(metrics.entropy), Some(metrics.expected_remaining))
            } else {
                (None, None)
            };

        let feedback = match game.submit(guess.text())? {
            GuessOutcome::Feedback(feedback) => {
                player.observe(&guess, &feedback);
                Some(feedback)
            }
            GuessOutcome::Solved | GuessOutcome::NotInDictionary => None,
        };

        let candidates_after = if feedback.is_some() {
            player.candidates().len()
        } else {
            1
        };

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        target: config.target,
        state: game.state(),
        steps,
    })
}
