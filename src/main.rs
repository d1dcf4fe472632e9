//! Distle - CLI
//!
//! Play the edit distance word game, watch the solver play it, or run many
//! automated games in parallel.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use distle::{
    commands::{
        GameShowConfig, SolveConfig, analyze_distance, run_assist, run_game_show, run_play,
        solve_word,
    },
    game::Game,
    output::{print_distance_result, print_game_show_statistics, print_solve_result},
    solver::{Player, StrategyType},
    wordlists::{Dictionary, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "distle",
    about = "Edit distance word game with an automated solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: hybrid (default), entropy, random, first
    #[arg(short, long, global = true, default_value = "hybrid")]
    strategy: String,

    /// Dictionary: 'default' (embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    dictionary: String,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = SolveConfig::DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for secret selection and random strategies
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random secret word yourself (default)
    Play,

    /// Watch the solver find a specific word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts and entropy for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many rounds automatically and report statistics
    GameShow {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Worker threads (default: one fewer than the available cores, at most 8)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Show the edit distance and operations between two words
    Distance {
        /// Word to transform
        source: String,

        /// Word to transform into
        target: String,
    },

    /// Get suggestions for a game played elsewhere
    Assist,
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(source: &str) -> Result<Arc<Dictionary>> {
    let dictionary = match source {
        "default" => Dictionary::default_words(),
        path => load_from_file(path).with_context(|| format!("loading dictionary {path}"))?,
    };

    if dictionary.is_empty() {
        anyhow::bail!("dictionary {source} contains no words");
    }

    Ok(Arc::new(dictionary))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, cli.max_guesses, cli.seed),
        Commands::Solve { word, verbose } => run_solve_command(
            &cli.strategy,
            &word,
            verbose,
            dictionary,
            cli.max_guesses,
            cli.seed,
        ),
        Commands::GameShow { rounds, threads } => {
            let config = GameShowConfig {
                rounds,
                max_guesses: cli.max_guesses,
                seed: cli.seed,
                threads: threads.unwrap_or_else(GameShowConfig::default_threads),
                strategy: cli.strategy,
                show_progress: true,
            };
            let stats = run_game_show(&config, dictionary)?;
            print_game_show_statistics(&stats);
            Ok(())
        }
        Commands::Distance { source, target } => {
            print_distance_result(&analyze_distance(&source, &target, &dictionary));
            Ok(())
        }
        Commands::Assist => {
            let mut player = Player::with_dictionary(
                StrategyType::from_name(&cli.strategy, cli.seed),
                dictionary,
                cli.max_guesses,
            );
            run_assist(
                &mut player,
                cli.max_guesses,
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )?;
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Arc<Dictionary>, max_guesses: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let game = Game::random(dictionary, &mut rng, max_guesses)?;

    run_play(game, &mut io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    word: &str,
    verbose: bool,
    dictionary: Arc<Dictionary>,
    max_guesses: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut player = Player::new(StrategyType::from_name(strategy_name, seed));
    let config = SolveConfig {
        target: word.to_string(),
        max_guesses,
    };

    let result = solve_word(config, dictionary, &mut player)?;
    print_solve_result(&result, verbose);
    Ok(())
}
