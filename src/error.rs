//! Errors produced by the Distle library

use thiserror::Error;

/// The errors that `distle` can produce.
#[derive(Debug, Error)]
pub enum DistleError {
    /// A secret word was requested that the dictionary does not contain.
    #[error("the word \"{0}\" is not in the dictionary")]
    InvalidWord(String),

    /// A secret index was requested past the end of the dictionary.
    #[error("index {index} is out of range for a dictionary of {len} words")]
    InvalidIndex { index: usize, len: usize },

    #[error("the dictionary is empty")]
    EmptyDictionary,

    /// A guess was submitted after the game reached a terminal state.
    #[error("the game is already over")]
    GameOver,

    #[error("'{0}' is not an edit operation (expected R, T, I or D)")]
    InvalidOperation(char),

    #[error("could not read dictionary")]
    Io(#[from] std::io::Error),

    #[error("could not start worker threads")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, DistleError>;
