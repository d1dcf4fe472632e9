//! Shannon entropy of Distle feedback
//!
//! Given a guess and a set of candidates, groups the candidates by the
//! feedback the guess would produce against each of them and measures how
//! evenly the guess splits them.

use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest feedback class (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a class-size distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use distle::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(class_sizes: impl IntoIterator<Item = usize> + Clone) -> f64 {
    let total = class_sizes.clone().into_iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    class_sizes
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the feedback distribution `guess` produces over `candidates`
///
/// # Examples
/// ```
/// use distle::core::Word;
/// use distle::solver::entropy::calculate_entropy;
///
/// let candidates = vec![Word::new("cat"), Word::new("dog")];
/// let entropy = calculate_entropy(&Word::new("bat"), &candidates);
/// assert!((entropy - 1.0).abs() < 0.001); // two distinct feedbacks
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(group_by_feedback(guess, candidates).into_values().collect::<Vec<_>>())
}

/// Entropy, expected remaining candidates and worst case in one pass
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let sizes: Vec<usize> = group_by_feedback(guess, candidates).into_values().collect();
    let total = candidates.len() as f64;

    // E[remaining] = Σ (size / total) * size
    let expected_remaining = sizes.iter().map(|&s| (s * s) as f64).sum::<f64>() / total;

    GuessMetrics {
        entropy: shannon_entropy(sizes.iter().copied()),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
    }
}

/// Select the guess from `guess_pool` with the highest entropy over `candidates`
///
/// Ties go to the alphabetically first word so the choice is deterministic
/// under parallel evaluation. Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .map(|guess| (guess, calculate_entropy(guess, candidates)))
        .max_by(|(w1, e1), (w2, e2)| e1.total_cmp(e2).then_with(|| w2.cmp(w1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    #[test]
    fn entropy_of_uniform_split() {
        assert!((shannon_entropy([1, 1, 1, 1]) - 2.0).abs() < 1e-9);
        assert!((shannon_entropy([2, 2]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_certain_outcome() {
        assert!(shannon_entropy([10]).abs() < 1e-9);
        assert!(shannon_entropy(Vec::<usize>::new()).abs() < 1e-9);
    }

    #[test]
    fn entropy_against_no_candidates() {
        assert!(calculate_entropy(&Word::new("cat"), &[]).abs() < 1e-9);
    }

    #[test]
    fn metrics_for_toy_dictionary() {
        // bat vs {bat, cat, cot, dog}: solved, [R], [R, R], [R, R, R]
        let candidates = words(&["bat", "cat", "cot", "dog"]);
        let metrics = calculate_metrics(&Word::new("bat"), &candidates);

        assert!((metrics.entropy - 2.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_empty() {
        let metrics = calculate_metrics(&Word::new("bat"), &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < 1e-9);
    }

    #[test]
    fn selects_most_informative_guess() {
        // "aaa" cannot tell "bbb" from "ccc"; "bbb" separates all three
        let candidates = words(&["bbb", "ccc", "bbc"]);
        let pool = words(&["aaa", "bbb"]);

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "bbb");
        assert!(entropy > 1.0);
    }

    #[test]
    fn ties_go_to_first_word() {
        let candidates = words(&["zzz"]);
        let pool = words(&["aaa", "bbb", "ccc"]);

        for _ in 0..5 {
            let (best, _) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(best.text(), "aaa");
        }
    }

    #[test]
    fn empty_pool() {
        let candidates = words(&["cat"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
