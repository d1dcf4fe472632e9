//! Distance command
//!
//! Shows the edit distance between two words, the operations the game would
//! report for them, and the table they were read from.

use crate::core::{DistanceTable, OperationSequence, Word, transformation_list_with_table};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::wordlists::Dictionary;

/// Result of comparing two words
#[derive(Debug, Clone)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub distance: usize,
    /// Operations turning `source` into `target`
    pub operations: OperationSequence,
    /// Operations turning `target` back into `source`
    pub reverse_operations: OperationSequence,
    pub table: DistanceTable,
    /// How well `source` would split the dictionary as an opening guess
    pub opening_metrics: Option<GuessMetrics>,
    pub dictionary_len: usize,
}

/// Compare `source` against `target`
///
/// Neither word has to be in the dictionary. When `source` is, the result
/// also carries its metrics as a first guess.
#[must_use]
pub fn analyze_distance(source: &str, target: &str, dictionary: &Dictionary) -> DistanceResult {
    let source_word = Word::new(source);
    let target_word = Word::new(target);

    let table = DistanceTable::new(source_word.chars(), target_word.chars());
    let operations =
        transformation_list_with_table(source_word.chars(), target_word.chars(), &table);

    let reverse_table = DistanceTable::new(target_word.chars(), source_word.chars());
    let reverse_operations =
        transformation_list_with_table(target_word.chars(), source_word.chars(), &reverse_table);

    let opening_metrics = dictionary
        .find(source)
        .map(|word| calculate_metrics(word, dictionary.words()));

    DistanceResult {
        source: source.to_string(),
        target: target.to_string(),
        distance: table.distance(),
        operations,
        reverse_operations,
        table,
        opening_metrics,
        dictionary_len: dictionary.len(),
    }
}
