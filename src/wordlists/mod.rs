//! Dictionaries for Distle
//!
//! Provides the shared [`Dictionary`] type, file loading, and an embedded
//! default word list compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
