//! A single game of Distle
//!
//! The game owns the secret and the guess budget and turns each guess into
//! feedback. It knows nothing about how guesses are chosen.

use super::Guesser;
use crate::core::{Feedback, Word};
use crate::error::{DistleError, Result};
use crate::wordlists::Dictionary;
use log::{debug, info, warn};
use rand::Rng;
use std::sync::Arc;

/// Where a game currently stands
///
/// A guess is evaluated inside [`Game::submit`], so the transient
/// "evaluating" step never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the next guess
    AwaitingGuess,
    /// A guess matched the secret
    Won,
    /// The budget was spent without a match
    Exhausted,
    /// The guesser had nothing left to guess
    Abandoned,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess is the secret
    Solved,
    /// The guess is a dictionary word but not the secret
    Feedback(Feedback),
    /// The guess is not in the dictionary; the attempt is still spent
    NotInDictionary,
}

/// One submitted guess and what came of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub outcome: GuessOutcome,
}

/// Summary of a finished game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub secret: Word,
    pub state: GameState,
    pub turns: Vec<Turn>,
    pub max_guesses: usize,
}

impl GameResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Attempts spent, including rejected ones
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.turns.len()
    }
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    dictionary: Arc<Dictionary>,
    secret: Word,
    max_guesses: usize,
    state: GameState,
    turns: Vec<Turn>,
}

impl Game {
    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns [`DistleError::InvalidWord`] if `secret` is not in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use distle::game::{Game, GuessOutcome};
    /// use distle::wordlists::Dictionary;
    ///
    /// let dictionary = Arc::new(Dictionary::from_strs(["bat", "cat", "cot"]));
    /// let mut game = Game::new(dictionary, "cat", 3)?;
    ///
    /// assert!(matches!(game.submit("bat")?, GuessOutcome::Feedback(_)));
    /// assert_eq!(game.submit("cat")?, GuessOutcome::Solved);
    /// # Ok::<_, distle::DistleError>(())
    /// ```
    pub fn new(dictionary: Arc<Dictionary>, secret: &str, max_guesses: usize) -> Result<Self> {
        let secret = dictionary
            .find(secret)
            .cloned()
            .ok_or_else(|| DistleError::InvalidWord(secret.to_string()))?;

        Ok(Self::start(dictionary, secret, max_guesses))
    }

    /// Start a game whose secret is the word at `index` in sorted order
    ///
    /// # Errors
    ///
    /// Returns [`DistleError::InvalidIndex`] if `index` is past the end of the
    /// dictionary.
    pub fn with_index(dictionary: Arc<Dictionary>, index: usize, max_guesses: usize) -> Result<Self> {
        let secret = dictionary
            .get(index)
            .cloned()
            .ok_or(DistleError::InvalidIndex {
                index,
                len: dictionary.len(),
            })?;

        Ok(Self::start(dictionary, secret, max_guesses))
    }

    /// Start a game with a uniformly random secret
    ///
    /// # Errors
    ///
    /// Returns [`DistleError::EmptyDictionary`] if there is nothing to pick from.
    pub fn random<R: Rng + ?Sized>(
        dictionary: Arc<Dictionary>,
        rng: &mut R,
        max_guesses: usize,
    ) -> Result<Self> {
        let index = dictionary
            .random_index(rng)
            .ok_or(DistleError::EmptyDictionary)?;
        Self::with_index(dictionary, index, max_guesses)
    }

    fn start(dictionary: Arc<Dictionary>, secret: Word, max_guesses: usize) -> Self {
        debug!("new game: {} words, {max_guesses} guesses", dictionary.len());

        let state = if max_guesses == 0 {
            GameState::Exhausted
        } else {
            GameState::AwaitingGuess
        };

        Self {
            dictionary,
            secret,
            max_guesses,
            state,
            turns: Vec::new(),
        }
    }

    /// Evaluate one guess
    ///
    /// Every call spends one attempt, including guesses that are not in the
    /// dictionary (those get no feedback).
    ///
    /// # Errors
    ///
    /// Returns [`DistleError::GameOver`] if the game has already ended.
    pub fn submit(&mut self, guess: &str) -> Result<GuessOutcome> {
        if self.state.is_over() {
            return Err(DistleError::GameOver);
        }

        let outcome = match self.dictionary.find(guess) {
            None => {
                warn!("guess {guess:?} is not in the dictionary");
                GuessOutcome::NotInDictionary
            }
            Some(word) => {
                let feedback = Feedback::calculate(word, &self.secret);
                if feedback.is_solved() {
                    GuessOutcome::Solved
                } else {
                    GuessOutcome::Feedback(feedback)
                }
            }
        };

        self.turns.push(Turn {
            guess: guess.to_string(),
            outcome: outcome.clone(),
        });

        if outcome == GuessOutcome::Solved {
            self.state = GameState::Won;
        } else if self.turns.len() >= self.max_guesses {
            self.state = GameState::Exhausted;
        }

        debug!(
            "guess {}/{} {guess:?}: {outcome:?} -> {:?}",
            self.turns.len(),
            self.max_guesses,
            self.state
        );
        Ok(outcome)
    }

    /// Stop the game early because no guess is available
    pub fn abandon(&mut self) {
        if !self.state.is_over() {
            self.state = GameState::Abandoned;
        }
    }

    /// Play the game to the end with `guesser`
    ///
    /// The guesser is reset with a handle to this game's dictionary, asked for
    /// guesses until the game ends, and told the feedback of every
    /// in-dictionary guess that missed.
    pub fn play<G: Guesser + ?Sized>(mut self, guesser: &mut G) -> GameResult {
        guesser.reset(Arc::clone(&self.dictionary), self.max_guesses);

        while !self.state.is_over() {
            let Some(guess) = guesser.next_guess() else {
                warn!("guesser gave up after {} guesses", self.turns.len());
                self.abandon();
                break;
            };

            // The game is running, so submit cannot fail
            let Ok(outcome) = self.submit(guess.text()) else {
                break;
            };

            if let GuessOutcome::Feedback(feedback) = &outcome {
                guesser.observe(&guess, feedback);
            }
        }

        info!(
            "game over: secret {}, {:?} after {} guesses",
            self.secret,
            self.state,
            self.turns.len()
        );
        self.into_result()
    }

    /// Summary of the game so far
    #[must_use]
    pub fn into_result(self) -> GameResult {
        GameResult {
            secret: self.secret,
            state: self.state,
            turns: self.turns,
            max_guesses: self.max_guesses,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.turns.len())
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedGuesser;
    use crate::solver::{Player, StrategyType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_strs(["abc", "abd", "xyz", "cat", "bat", "cot", "dog"]))
    }

    #[test]
    fn secret_must_be_in_dictionary() {
        let result = Game::new(dictionary(), "zebra", 5);
        assert!(matches!(result, Err(DistleError::InvalidWord(ref w)) if w == "zebra"));
    }

    #[test]
    fn secret_index_must_be_in_range() {
        let result = Game::with_index(dictionary(), 7, 5);
        assert!(matches!(
            result,
            Err(DistleError::InvalidIndex { index: 7, len: 7 })
        ));

        let game = Game::with_index(dictionary(), 0, 5).unwrap();
        assert_eq!(game.secret().text(), "abc");
    }

    #[test]
    fn random_secret_needs_words() {
        let mut rng = StdRng::seed_from_u64(9);
        let empty = Arc::new(Dictionary::default());
        assert!(matches!(
            Game::random(empty, &mut rng, 3),
            Err(DistleError::EmptyDictionary)
        ));

        let game = Game::random(dictionary(), &mut rng, 3).unwrap();
        assert!(dictionary().contains(game.secret().text()));
    }

    #[test]
    fn scripted_win_on_third_guess() {
        let game = Game::new(dictionary(), "abc", 3).unwrap();
        let mut guesser = ScriptedGuesser::new(["xyz", "abd", "abc"]);

        let result = game.play(&mut guesser);

        assert!(result.won());
        assert_eq!(result.state, GameState::Won);
        assert_eq!(result.guesses_used(), 3);
        assert_eq!(result.max_guesses - result.guesses_used(), 0);
        assert_eq!(result.turns[2].outcome, GuessOutcome::Solved);

        // Feedback for both misses, none for the win
        let observed = guesser.observed();
        assert_eq!(observed.len(), 2);
        assert_eq!(observed[0].1.distance(), 3);
        assert_eq!(observed[0].1.operations().to_tokens(), "RRR");
        assert_eq!(observed[1].1.distance(), 1);
        assert_eq!(observed[1].1.operations().to_tokens(), "R");
    }

    #[test]
    fn submit_tracks_remaining_guesses() {
        let mut game = Game::new(dictionary(), "abc", 3).unwrap();
        assert_eq!(game.remaining_guesses(), 3);

        game.submit("xyz").unwrap();
        game.submit("abd").unwrap();
        assert_eq!(game.remaining_guesses(), 1);
        assert_eq!(game.state(), GameState::AwaitingGuess);

        assert_eq!(game.submit("abc").unwrap(), GuessOutcome::Solved);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.remaining_guesses(), 0);
    }

    #[test]
    fn unknown_guess_spends_an_attempt() {
        let mut game = Game::new(dictionary(), "cat", 2).unwrap();

        assert_eq!(game.submit("zzz").unwrap(), GuessOutcome::NotInDictionary);
        assert_eq!(game.guesses_made(), 1);
        assert_eq!(game.state(), GameState::AwaitingGuess);

        assert_eq!(game.submit("cat").unwrap(), GuessOutcome::Solved);
    }

    #[test]
    fn unknown_guess_gets_no_feedback() {
        let game = Game::new(dictionary(), "cat", 3).unwrap();
        let mut guesser = ScriptedGuesser::new(["zzz", "bat", "cat"]);

        let result = game.play(&mut guesser);

        assert!(result.won());
        assert_eq!(guesser.observed().len(), 1);
        assert_eq!(guesser.observed()[0].0.text(), "bat");
    }

    #[test]
    fn budget_runs_out() {
        let game = Game::new(dictionary(), "dog", 2).unwrap();
        let mut guesser = ScriptedGuesser::new(["cat", "bat", "dog"]);

        let result = game.play(&mut guesser);

        assert_eq!(result.state, GameState::Exhausted);
        assert!(!result.won());
        assert_eq!(result.guesses_used(), 2);
    }

    #[test]
    fn submit_after_game_over_fails() {
        let mut game = Game::new(dictionary(), "cat", 1).unwrap();
        game.submit("bat").unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
        assert!(matches!(game.submit("cat"), Err(DistleError::GameOver)));
    }

    #[test]
    fn zero_budget_is_exhausted_immediately() {
        let game = Game::new(dictionary(), "cat", 0).unwrap();
        assert_eq!(game.state(), GameState::Exhausted);
    }

    #[test]
    fn guesser_running_out_abandons() {
        let game = Game::new(dictionary(), "dog", 5).unwrap();
        let mut guesser = ScriptedGuesser::new(["cat"]);

        let result = game.play(&mut guesser);

        assert_eq!(result.state, GameState::Abandoned);
        assert_eq!(result.guesses_used(), 1);
    }

    #[test]
    fn player_always_wins_with_enough_guesses() {
        let dictionary = dictionary();
        for secret in dictionary.iter() {
            let game = Game::new(Arc::clone(&dictionary), secret.text(), dictionary.len()).unwrap();
            let mut player = Player::new(StrategyType::from_name("first", None));

            let result = game.play(&mut player);
            assert!(result.won(), "failed on {secret}");
        }
    }
}
