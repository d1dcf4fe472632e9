//! Running a game
//!
//! [`Game`] owns the secret and the guess budget; a [`Guesser`] supplies the
//! guesses.

mod guesser;
mod session;

pub use guesser::{Guesser, ScriptedGuesser};
pub use session::{Game, GameResult, GameState, GuessOutcome, Turn};
