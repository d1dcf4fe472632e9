//! Automated Distle player
//!
//! Couples a guess [`Strategy`] with the [`CandidateSet`] of words still
//! consistent with the feedback seen so far.

use super::candidates::CandidateSet;
use super::strategy::{Strategy, StrategyType};
use crate::core::{Feedback, Word};
use crate::game::Guesser;
use crate::wordlists::Dictionary;
use log::{debug, trace};
use std::sync::Arc;

/// Automated player
///
/// One player lives for one game at a time: [`Guesser::reset`] throws away
/// all state from the previous game.
#[derive(Debug, Clone)]
pub struct Player<S: Strategy = StrategyType> {
    strategy: S,
    dictionary: Arc<Dictionary>,
    max_guesses: usize,
    guesses_made: usize,
    candidates: CandidateSet,
    history: Vec<(Word, Feedback)>,
}

impl<S: Strategy> Player<S> {
    /// Create a player with no dictionary yet
    ///
    /// A game hands the dictionary over through [`Guesser::reset`].
    pub fn new(strategy: S) -> Self {
        Self::with_dictionary(strategy, Arc::new(Dictionary::default()), 0)
    }

    /// Create a player ready to play over `dictionary`
    pub fn with_dictionary(strategy: S, dictionary: Arc<Dictionary>, max_guesses: usize) -> Self {
        let candidates = CandidateSet::new(&dictionary);
        Self {
            strategy,
            dictionary,
            max_guesses,
            guesses_made: 0,
            candidates,
            history: Vec::new(),
        }
    }

    /// Suggest a guess without counting it as made
    ///
    /// The first guess may be any dictionary word; later guesses always come
    /// from the remaining candidates. Returns `None` once no candidate is left.
    pub fn suggest(&mut self) -> Option<Word> {
        if self.history.is_empty() {
            return self.strategy.select_guess(self.dictionary.words()).cloned();
        }

        match self.candidates.words() {
            [] => None,
            [only] => Some(only.clone()),
            words => self.strategy.select_guess(words).cloned(),
        }
    }

    /// Take back the most recent observation
    ///
    /// Rebuilds the candidates from the remaining history. Returns the
    /// observation that was removed.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let last = self.history.pop()?;
        self.candidates.reset(&self.dictionary);
        for (guess, feedback) in &self.history {
            self.candidates.observe(guess, feedback);
        }
        self.guesses_made = self.guesses_made.saturating_sub(1);
        debug!("undid {}, {} candidates", last.0, self.candidates.len());
        Some(last)
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses_made)
    }

    /// Every observation of the current game, in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: Strategy> Guesser for Player<S> {
    fn reset(&mut self, dictionary: Arc<Dictionary>, max_guesses: usize) {
        self.candidates.reset(&dictionary);
        self.dictionary = dictionary;
        self.max_guesses = max_guesses;
        self.guesses_made = 0;
        self.history.clear();
        trace!("player reset with {} candidates", self.candidates.len());
    }

    fn next_guess(&mut self) -> Option<Word> {
        let guess = self.suggest()?;
        self.guesses_made += 1;
        debug!(
            "guess {} is {guess} ({} candidates)",
            self.guesses_made,
            self.candidates.len()
        );
        Some(guess)
    }

    fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        self.candidates.observe(guess, feedback);
        self.history.push((guess.clone(), feedback.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FirstStrategy, RandomStrategy};
    use proptest::prelude::*;

    fn toy() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_strs(["cat", "bat", "cot", "dog"]))
    }

    #[test]
    fn first_guess_comes_from_dictionary() {
        let mut player = Player::new(FirstStrategy);
        player.reset(toy(), 5);

        assert_eq!(player.next_guess().unwrap().text(), "bat");
        assert_eq!(player.guesses_made(), 1);
        assert_eq!(player.remaining_guesses(), 4);
    }

    #[test]
    fn later_guesses_come_from_candidates() {
        let mut player = Player::new(FirstStrategy);
        player.reset(toy(), 5);

        let guess = player.next_guess().unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("cat"));
        player.observe(&guess, &feedback);

        assert_eq!(player.candidates().len(), 1);
        assert_eq!(player.next_guess().unwrap().text(), "cat");
    }

    #[test]
    fn empty_candidates_give_no_guess() {
        let mut player = Player::new(FirstStrategy);
        player.reset(toy(), 5);

        let guess = player.next_guess().unwrap();
        player.observe(&guess, &Feedback::new(5, "DDDDD".parse().unwrap()));

        assert!(player.candidates().is_empty());
        assert!(player.next_guess().is_none());
        assert_eq!(player.guesses_made(), 1);
    }

    #[test]
    fn unreset_player_has_nothing_to_guess() {
        let mut player = Player::new(FirstStrategy);
        assert!(player.next_guess().is_none());
    }

    #[test]
    fn reset_clears_previous_game() {
        let mut player = Player::new(FirstStrategy);
        player.reset(toy(), 5);
        let guess = player.next_guess().unwrap();
        player.observe(&guess, &Feedback::calculate(&guess, &Word::new("dog")));
        assert_eq!(player.candidates().len(), 1);

        player.reset(toy(), 3);
        assert_eq!(player.candidates().len(), 4);
        assert_eq!(player.guesses_made(), 0);
        assert!(player.history().is_empty());
        assert_eq!(player.remaining_guesses(), 3);
    }

    #[test]
    fn undo_restores_candidates() {
        let mut player = Player::with_dictionary(FirstStrategy, toy(), 5);
        let guess = player.next_guess().unwrap();
        player.observe(&guess, &Feedback::calculate(&guess, &Word::new("cot")));
        assert_eq!(player.candidates().len(), 1);

        let (undone, _) = player.undo().unwrap();
        assert_eq!(undone.text(), "bat");
        assert_eq!(player.candidates().len(), 4);
        assert_eq!(player.guesses_made(), 0);
        assert!(player.undo().is_none());
    }

    #[test]
    fn suggest_does_not_count() {
        let mut player = Player::with_dictionary(FirstStrategy, toy(), 5);
        assert!(player.suggest().is_some());
        assert_eq!(player.guesses_made(), 0);
    }

    proptest! {
        #[test]
        fn guesses_are_dictionary_words_and_secret_survives(
            words in proptest::collection::btree_set("[a-c]{1,4}", 2..25),
            secret_pick in any::<prop::sample::Index>(),
            seed in any::<u64>(),
        ) {
            let dictionary = Arc::new(Dictionary::from_strs(&words));
            let secret = secret_pick.get(dictionary.words()).clone();
            let mut player = Player::new(RandomStrategy::seeded(seed));
            player.reset(Arc::clone(&dictionary), dictionary.len());

            for _ in 0..dictionary.len() {
                let guess = player.next_guess().unwrap();
                prop_assert!(dictionary.contains(guess.text()));

                let feedback = Feedback::calculate(&guess, &secret);
                if feedback.is_solved() {
                    break;
                }

                let before = player.candidates().len();
                player.observe(&guess, &feedback);
                prop_assert!(player.candidates().contains(secret.text()));
                // The guess itself is always ruled out
                prop_assert!(player.candidates().len() < before);
            }
        }
    }
}
