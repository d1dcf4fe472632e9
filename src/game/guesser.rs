//! The contract between a game and whoever is guessing

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use std::sync::Arc;

/// Anything that can play a game of Distle
///
/// A game calls [`reset`](Guesser::reset) once, then alternates
/// [`next_guess`](Guesser::next_guess) and, for every in-dictionary guess
/// that did not win, [`observe`](Guesser::observe).
pub trait Guesser {
    /// Prepare for a new game over `dictionary` with `max_guesses` attempts
    fn reset(&mut self, dictionary: Arc<Dictionary>, max_guesses: usize);

    /// Produce the next guess
    ///
    /// `None` means the guesser has nothing left to try, which ends the game.
    fn next_guess(&mut self) -> Option<Word>;

    /// Feedback for the last guess, which was a dictionary word but not the secret
    fn observe(&mut self, guess: &Word, feedback: &Feedback);
}

/// Guesser that replays a fixed list of words
///
/// Useful for tests and for reproducing a reported game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuesser {
    script: Vec<Word>,
    position: usize,
    observed: Vec<(Word, Feedback)>,
}

impl ScriptedGuesser {
    pub fn new<S: AsRef<str>>(script: impl IntoIterator<Item = S>) -> Self {
        Self {
            script: script.into_iter().map(|s| Word::new(s.as_ref())).collect(),
            position: 0,
            observed: Vec::new(),
        }
    }

    /// Every feedback received so far, in order
    #[must_use]
    pub fn observed(&self) -> &[(Word, Feedback)] {
        &self.observed
    }
}

impl Guesser for ScriptedGuesser {
    fn reset(&mut self, _dictionary: Arc<Dictionary>, _max_guesses: usize) {
        self.position = 0;
        self.observed.clear();
    }

    fn next_guess(&mut self) -> Option<Word> {
        let guess = self.script.get(self.position).cloned();
        self.position += 1;
        guess
    }

    fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        self.observed.push((guess.clone(), feedback.clone()));
    }
}
