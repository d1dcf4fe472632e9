//! Distle word representation
//!
//! A Word stores its text together with the decoded characters used by the
//! distance table, so repeated comparisons never re-decode UTF-8.

use std::fmt;
use std::sync::Arc;

/// An immutable dictionary word
///
/// Words are compared and ordered by their text. The character policy
/// (case, alphabet) is owned by the dictionary, so construction never fails.
/// Cloning is cheap: both representations sit behind shared pointers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: Arc<str>,
    chars: Arc<[char]>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use distle::core::Word;
    ///
    /// let word = Word::new("hack");
    /// assert_eq!(word.text(), "hack");
    /// assert_eq!(word.len(), 4);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars: Arc<[char]> = text.chars().collect();

        Self {
            text: text.into(),
            chars,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decoded characters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
