//! Human play mode
//!
//! Reads guesses line by line and answers each with its edit distance and
//! operations until the game ends.

use crate::error::Result;
use crate::game::{Game, GameResult, GameState, GuessOutcome};
use crate::output::formatters::format_feedback;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Play `game` interactively
///
/// An empty line is ignored; `quit` or end of input gives up. Guesses that
/// are not dictionary words are rejected but still use up a turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    out: &mut W,
) -> Result<GameResult> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "DISTLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nGuess the secret word. After each guess you get the edit distance to it"
    )?;
    writeln!(
        out,
        "and the operations that turn your guess into it: R(eplace), T(ranspose),"
    )?;
    writeln!(out, "I(nsert), D(elete). Type 'quit' to give up.\n")?;

    while game.state() == GameState::AwaitingGuess {
        write!(
            out,
            "Guess {}/{}: ",
            game.guesses_made() + 1,
            game.max_guesses()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            game.abandon();
            break;
        }

        // Guesses keep their case; the dictionary decides what matches
        let guess = line.trim();
        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                game.abandon();
                break;
            }
            _ => {}
        }

        match game.submit(guess)? {
            GuessOutcome::Solved => {}
            GuessOutcome::Feedback(feedback) => {
                writeln!(out, "  {}", format_feedback(&feedback))?;
            }
            GuessOutcome::NotInDictionary => {
                writeln!(
                    out,
                    "  {} is not in the dictionary (turn used)",
                    guess.bright_white().bold()
                )?;
            }
        }
    }

    let result = game.into_result();
    writeln!(out)?;
    match result.state {
        GameState::Won => writeln!(
            out,
            "{}",
            format!("Solved in {} guesses!", result.guesses_used())
                .green()
                .bold()
        )?,
        _ => writeln!(
            out,
            "{} The word was {}.",
            "Out of luck.".red().bold(),
            result.secret.text().bright_yellow().bold()
        )?,
    }

    Ok(result)
}
