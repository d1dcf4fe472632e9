//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! ever chooses among the words it is handed, so a player that passes its
//! current candidates can never guess a word already ruled out.

use super::entropy;
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A policy for choosing the next guess
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Random candidate (default for large candidate sets)
    Random(RandomStrategy),
    /// Alphabetically first candidate
    First(FirstStrategy),
    /// Candidate maximising feedback entropy
    Entropy(EntropyStrategy),
    /// Random while many candidates remain, entropy near the end
    Hybrid(HybridStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::Random(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Entropy(s) => s.select_guess(candidates),
            Self::Hybrid(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "first", "entropy", "hybrid".
    /// Defaults to hybrid if name is unrecognized. `seed` makes the random
    /// parts reproducible.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::from_seed(seed)),
            "first" => Self::First(FirstStrategy),
            "entropy" => Self::Entropy(EntropyStrategy),
            _ => Self::Hybrid(HybridStrategy::new(
                HybridStrategy::DEFAULT_THRESHOLD,
                RandomStrategy::from_seed(seed),
            )),
        }
    }

    /// Name accepted by [`from_name`](Self::from_name)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::First(_) => "first",
            Self::Entropy(_) => "entropy",
            Self::Hybrid(_) => "hybrid",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::from_name("hybrid", None)
    }
}

/// Uniformly random candidate
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::seeded)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.choose(&mut self.rng)
    }
}

/// Alphabetically first candidate
///
/// Deterministic; handy for reproducing a game step by step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.iter().min()
    }
}

/// Pure entropy maximisation over the candidates
///
/// Cost grows with the square of the candidate count.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        entropy::select_best_guess(candidates, candidates).map(|(best, _)| best)
    }
}

/// Random guesses until few candidates remain, entropy afterwards
#[derive(Debug, Clone)]
pub struct HybridStrategy {
    /// Switch to entropy when candidates <= this threshold
    pub entropy_threshold: usize,
    random: RandomStrategy,
}

impl HybridStrategy {
    pub const DEFAULT_THRESHOLD: usize = 64;

    #[must_use]
    pub const fn new(entropy_threshold: usize, random: RandomStrategy) -> Self {
        Self {
            entropy_threshold,
            random,
        }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, RandomStrategy::default())
    }
}

impl Strategy for HybridStrategy {
    fn select_guess<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        if candidates.len() <= self.entropy_threshold {
            EntropyStrategy.select_guess(candidates)
        } else {
            self.random.select_guess(candidates)
        }
    }
}
