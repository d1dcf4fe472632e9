//! Distle feedback calculation
//!
//! Feedback for a guess is the edit distance to the secret plus the canonical
//! operation sequence turning the guess into the secret. Both come from a
//! single table build.

use super::backtrace::transformation_list_with_table;
use super::operation::{Operation, OperationSequence};
use super::table::DistanceTable;
use super::Word;
use std::fmt;

/// What a guesser learns from one in-dictionary guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    distance: usize,
    operations: OperationSequence,
}

impl Feedback {
    /// Feedback of a correct guess
    pub const SOLVED: Self = Self {
        distance: 0,
        operations: OperationSequence::new(),
    };

    /// Assemble feedback from already known parts (e.g. typed in by a user)
    #[must_use]
    pub const fn new(distance: usize, operations: OperationSequence) -> Self {
        Self {
            distance,
            operations,
        }
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use distle::core::{Feedback, Word};
    ///
    /// let feedback = Feedback::calculate(&Word::new("hack"), &Word::new("fkc"));
    /// assert_eq!(feedback.distance(), 3);
    /// assert_eq!(feedback.operations().to_tokens(), "TRD");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        if guess == secret {
            return Self::SOLVED;
        }

        let table = DistanceTable::new(guess.chars(), secret.chars());
        let operations = transformation_list_with_table(guess.chars(), secret.chars(), &table);

        Self {
            distance: table.distance(),
            operations,
        }
    }

    #[inline]
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.distance
    }

    #[inline]
    #[must_use]
    pub const fn operations(&self) -> &OperationSequence {
        &self.operations
    }

    /// A zero distance means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.distance == 0
    }

    /// Length the secret must have if this feedback came from `guess`
    ///
    /// Returns `None` when the operations delete more characters than the
    /// guess has, which no real secret can produce.
    #[must_use]
    pub fn implied_length(&self, guess: &Word) -> Option<usize> {
        guess.len().checked_add_signed(self.operations.length_delta())
    }

    /// Number of occurrences of `operation` in the sequence
    #[must_use]
    pub fn count(&self, operation: Operation) -> usize {
        self.operations.count(operation)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "distance {} {}", self.distance, self.operations)
    }
}
