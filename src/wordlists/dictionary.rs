//! The Distle dictionary
//!
//! A sorted, deduplicated and immutable list of words. Games share one
//! dictionary behind an `Arc` and never mutate it; every player copies the
//! words it wants to prune into its own candidate set.

use super::DEFAULT_WORDS;
use crate::core::Word;
use rand::Rng;

/// Sorted set of playable words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, sorting and removing duplicates
    ///
    /// # Examples
    /// ```
    /// use distle::core::Word;
    /// use distle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["dog", "cat", "dog"].map(Word::new));
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.get(0).unwrap().text(), "cat");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Build a dictionary from anything string-like
    pub fn from_strs<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::new(words.into_iter().map(|s| Word::new(s.as_ref())))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn default_words() -> Self {
        Self::from_strs(DEFAULT_WORDS)
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

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words
            .binary_search_by(|word| word.text().cmp(text))
            .ok()
            .map(|index| &self.words[index])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Word at `index` in sorted order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Uniformly random index into the sorted word list
    ///
    /// Returns `None` for an empty dictionary.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.words.is_empty() {
            None
        } else {
            Some(rng.random_range(0..self.words.len()))
        }
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
