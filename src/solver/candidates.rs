//! Candidate pruning
//!
//! A [`CandidateSet`] holds every dictionary word still consistent with all
//! feedback received in a game. A word `w` survives an observation of
//! `(guess, feedback)` exactly when `Feedback::calculate(guess, w)` equals the
//! observed feedback, so the secret always survives.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use log::{debug, trace};

/// Words consistent with every observation made so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Start a game with every dictionary word as a candidate
    #[must_use]
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.words().to_vec(),
        }
    }

    /// Restore the full dictionary
    pub fn reset(&mut self, dictionary: &Dictionary) {
        self.words.clear();
        self.words.extend_from_slice(dictionary.words());
    }

    /// Remove every word that would not have produced `feedback` for `guess`
    ///
    /// Candidates whose length cannot match the length change implied by the
    /// operations are dropped before any table is built. An empty result is
    /// a legitimate state: no dictionary word explains the feedback.
    ///
    /// Returns the number of words removed.
    ///
    /// # Examples
    /// ```
    /// use distle::core::{Feedback, Word};
    /// use distle::solver::CandidateSet;
    /// use distle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(["bat", "cat", "cot", "dog"]);
    /// let mut candidates = CandidateSet::new(&dictionary);
    ///
    /// let guess = Word::new("bat");
    /// let feedback = Feedback::calculate(&guess, &Word::new("cat"));
    /// candidates.observe(&guess, &feedback);
    ///
    /// assert_eq!(candidates.len(), 1);
    /// assert!(candidates.contains("cat"));
    /// ```
    pub fn observe(&mut self, guess: &Word, feedback: &Feedback) -> usize {
        let before = self.words.len();

        match feedback.implied_length(guess) {
            Some(length) => self.words.retain(|word| word.len() == length),
            None => self.words.clear(),
        }
        let after_length = self.words.len();

        self.words
            .retain(|word| Feedback::calculate(guess, word) == *feedback);

        let removed = before - self.words.len();
        trace!(
            "length pre-filter on {guess}: {before} -> {after_length} candidates"
        );
        debug!(
            "observed {guess} ({feedback}): {before} -> {} candidates",
            self.words.len()
        );
        removed
    }

    /// Keep only words accepted by `keep`
    ///
    /// Used for exclusions that do not come from feedback, such as a guess
    /// known to be wrong.
    pub fn retain(&mut self, keep: impl FnMut(&Word) -> bool) {
        self.words.retain(keep);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words
            .binary_search_by(|word| word.text().cmp(text))
            .is_ok()
    }

    /// Remaining candidates in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}
