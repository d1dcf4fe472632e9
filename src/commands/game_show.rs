//! Game show: many automated games in parallel
//!
//! Draws secret words from a seeded generator, plays every round with a fresh
//! player on a rayon pool, and summarises how the strategy did.

use crate::error::{DistleError, Result};
use crate::game::{Game, GameResult, GameState};
use crate::solver::{Player, StrategyType};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for a game show
#[derive(Debug, Clone)]
pub struct GameShowConfig {
    pub rounds: usize,
    pub max_guesses: usize,
    /// Seeds both the secret draw and each round's strategy
    pub seed: Option<u64>,
    pub threads: usize,
    /// Strategy name, see [`StrategyType::from_name`]
    pub strategy: String,
    pub show_progress: bool,
}

impl GameShowConfig {
    /// One fewer than the available cores, capped at 8 and never below 1
    #[must_use]
    pub fn default_threads() -> usize {
        std::thread::available_parallelism()
            .map_or(1, NonZeroUsize::get)
            .saturating_sub(1)
            .clamp(1, 8)
    }
}

impl Default for GameShowConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            max_guesses: 10,
            seed: None,
            threads: Self::default_threads(),
            strategy: StrategyType::default().name().to_string(),
            show_progress: true,
        }
    }
}

/// Statistics from a game show
#[derive(Debug, Clone)]
pub struct GameShowStatistics {
    pub rounds: usize,
    pub wins: usize,
    pub exhausted: usize,
    pub abandoned: usize,
    /// Guesses needed, for won rounds only
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub total_time: Duration,
    pub max_guesses: usize,
}

impl GameShowStatistics {
    #[must_use]
    pub fn win_ratio(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }

    fn from_results(results: &[GameResult], max_guesses: usize, total_time: Duration) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut exhausted = 0;
        let mut abandoned = 0;

        for result in results {
            match result.state {
                GameState::Won => {
                    *guess_distribution.entry(result.guesses_used()).or_insert(0) += 1;
                }
                GameState::Exhausted => exhausted += 1,
                GameState::Abandoned => abandoned += 1,
                GameState::AwaitingGuess => {}
            }
        }

        let wins: usize = guess_distribution.values().sum();
        let total_guesses: usize = guess_distribution.iter().map(|(g, n)| g * n).sum();
        let average_guesses = if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        };

        Self {
            rounds: results.len(),
            wins,
            exhausted,
            abandoned,
            guess_distribution,
            average_guesses,
            total_time,
            max_guesses,
        }
    }
}

/// Draw `rounds` secret indices into a dictionary of `len` words
fn draw_secrets(rounds: usize, len: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..rounds).map(|_| rng.random_range(0..len)).collect()
}

fn progress_bar(rounds: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(rounds as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the game show
///
/// Every round gets its own [`Player`] and [`Game`]; only the dictionary is
/// shared. With a seed the whole show is reproducible.
///
/// # Errors
///
/// Returns [`DistleError::EmptyDictionary`] if there are no words to draw
/// secrets from, or [`DistleError::ThreadPool`] if the workers cannot start.
pub fn run_game_show(
    config: &GameShowConfig,
    dictionary: Arc<Dictionary>,
) -> Result<GameShowStatistics> {
    if dictionary.is_empty() {
        return Err(DistleError::EmptyDictionary);
    }

    let secrets = draw_secrets(config.rounds, dictionary.len(), config.seed);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()?;

    info!(
        "game show: {} rounds, {} strategy, {} threads",
        config.rounds, config.strategy, config.threads
    );

    let pb = progress_bar(config.rounds, config.show_progress);
    let start = Instant::now();

    let results: Vec<GameResult> = pool.install(|| {
        secrets
            .par_iter()
            .enumerate()
            .map(|(round, &index)| {
                let seed = config.seed.map(|seed| seed.wrapping_add(round as u64));
                let mut player = Player::new(StrategyType::from_name(&config.strategy, seed));
                let game = Game::with_index(Arc::clone(&dictionary), index, config.max_guesses)?;

                let result = game.play(&mut player);
                debug!("round {round}: {} {:?}", result.secret, result.state);
                pb.inc(1);
                Ok(result)
            })
            .collect::<Result<_>>()
    })?;

    pb.finish_with_message("done");

    Ok(GameShowStatistics::from_results(
        &results,
        config.max_guesses,
        start.elapsed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rounds: usize, seed: u64) -> GameShowConfig {
        GameShowConfig {
            rounds,
            seed: Some(seed),
            threads: 2,
            strategy: "hybrid".to_string(),
            show_progress: false,
            ..GameShowConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = GameShowConfig::default();
        assert_eq!(config.rounds, 100);
        assert_eq!(config.max_guesses, 10);
        assert!(config.seed.is_none());
        assert!((1..=8).contains(&config.threads));
    }

    #[test]
    fn seeded_secrets_are_reproducible() {
        assert_eq!(draw_secrets(20, 487, Some(3)), draw_secrets(20, 487, Some(3)));
        assert!(draw_secrets(50, 10, Some(3)).iter().all(|&i| i < 10));
    }

    #[test]
    fn every_round_is_accounted_for() {
        let stats = run_game_show(&config(12, 42), Arc::new(Dictionary::default_words())).unwrap();

        assert_eq!(stats.rounds, 12);
        assert_eq!(stats.wins + stats.exhausted + stats.abandoned, 12);
        assert!(stats.guess_distribution.keys().all(|&g| (1..=10).contains(&g)));
        assert!((0.0..=1.0).contains(&stats.win_ratio()));
    }

    #[test]
    fn seeded_show_is_reproducible() {
        let dictionary = Arc::new(Dictionary::default_words());
        let first = run_game_show(&config(8, 5), Arc::clone(&dictionary)).unwrap();
        let second = run_game_show(&config(8, 5), dictionary).unwrap();

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.guess_distribution, second.guess_distribution);
    }

    #[test]
    fn generous_budget_always_wins() {
        let dictionary = Arc::new(Dictionary::from_strs(["cat", "bat", "cot", "dog", "cab"]));
        let mut config = config(10, 1);
        config.max_guesses = dictionary.len();

        let stats = run_game_show(&config, dictionary).unwrap();
        assert_eq!(stats.wins, 10);
        assert!((stats.win_ratio() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let result = run_game_show(&config(3, 0), Arc::new(Dictionary::default()));
        assert!(matches!(result, Err(DistleError::EmptyDictionary)));
    }

    #[test]
    fn statistics_from_results() {
        let stats = GameShowStatistics::from_results(&[], 10, Duration::ZERO);
        assert_eq!(stats.rounds, 0);
        assert!(stats.win_ratio().abs() < 1e-9);
        assert!(stats.average_guesses.abs() < 1e-9);
    }
}
