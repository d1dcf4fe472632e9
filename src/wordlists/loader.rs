//! Dictionary loading utilities
//!
//! Dictionary files hold one word per line. Trailing whitespace and blank
//! lines are ignored; duplicates collapse into one entry.

use super::Dictionary;
use crate::core::Word;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns [`DistleError::Io`](crate::error::DistleError::Io) if the file
/// cannot be read.
///
/// # Examples
/// ```no_run
/// use distle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_words(&content);

    debug!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse newline-separated words
///
/// # Examples
/// ```
/// use distle::wordlists::loader::parse_words;
///
/// let dictionary = parse_words("cat\nbat\n\ncat\r\n");
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Dictionary {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect()
}

/// Convert embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use distle::wordlists::loader::words_from_slice;
/// use distle::wordlists::DEFAULT_WORDS;
///
/// let dictionary = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(dictionary.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_strs(slice)
}
