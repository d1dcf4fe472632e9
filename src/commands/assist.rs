//! Assist mode
//!
//! Helps with a game played elsewhere: the user reports each guess with the
//! distance and operations they were shown, and the tool narrows the
//! candidates and suggests what to guess next.

use crate::core::{Feedback, OperationSequence, Word};
use crate::error::Result;
use crate::game::Guesser;
use crate::output::formatters::{entropy_bar, format_feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Player, Strategy};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistCommand {
    Quit,
    New,
    Undo,
    /// The last guess was correct
    Solved,
    /// Feedback received for a guess
    Report { guess: Word, feedback: Feedback },
}

/// Parse one line of assist input
///
/// Reports look like `hack 3 TRD`; the operations may also be written as
/// `T,R,D` or `[T, R, D]`, and are left out when the distance is 0. The
/// guess keeps its case; commands do not.
///
/// # Errors
///
/// Returns a message describing what is wrong with the line.
pub fn parse_command(line: &str) -> std::result::Result<AssistCommand, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(AssistCommand::Quit),
        "new" | "n" => return Ok(AssistCommand::New),
        "undo" | "u" => return Ok(AssistCommand::Undo),
        "win" | "solved" | "correct" => return Ok(AssistCommand::Solved),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let guess = parts
        .next()
        .ok_or("expected: <guess> <distance> <operations>")?;
    let distance: usize = parts
        .next()
        .ok_or("missing distance")?
        .parse()
        .map_err(|_| "distance must be a whole number".to_string())?;
    let operations = parts
        .collect::<Vec<_>>()
        .join(" ")
        .parse::<OperationSequence>()
        .map_err(|e| e.to_string())?;

    if operations.len() != distance {
        return Err(format!(
            "distance {distance} does not match {} operations",
            operations.len()
        ));
    }

    if distance == 0 {
        return Ok(AssistCommand::Solved);
    }

    Ok(AssistCommand::Report {
        guess: Word::new(guess),
        feedback: Feedback::new(distance, operations),
    })
}

/// Run the assist loop until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn run_assist<S: Strategy, R: BufRead, W: Write>(
    player: &mut Player<S>,
    max_guesses: usize,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "DISTLE ASSIST".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nAfter each guess enter: <guess> <distance> <operations>, e.g. 'hack 3 TRD'."
    )?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    loop {
        let turn = player.history().len() + 1;
        let remaining = player.candidates().len();

        if remaining == 0 {
            writeln!(
                out,
                "{}",
                "No candidates remain! Some feedback may be wrong; 'undo' or 'new'.".red()
            )?;
        } else if let Some(suggestion) = player.suggest() {
            writeln!(out, "{}", "─".repeat(60))?;
            writeln!(out, "Turn {turn}: {remaining} candidates remaining")?;
            writeln!(
                out,
                "Suggested guess: {}",
                suggestion.text().bright_yellow().bold()
            )?;

            if turn > 1 && remaining > 1 {
                let metrics = calculate_metrics(&suggestion, player.candidates().words());
                writeln!(
                    out,
                    "  Entropy:    [{}] {:.3} bits",
                    entropy_bar(metrics.entropy, remaining, 20).green(),
                    metrics.entropy
                )?;
                writeln!(
                    out,
                    "  Expected:   {:.1} candidates, worst case {}",
                    metrics.expected_remaining, metrics.max_partition
                )?;
            }

            if turn > 1 && remaining <= 10 {
                let words: Vec<&str> = player.candidates().iter().map(Word::text).collect();
                writeln!(out, "  Candidates: {}", words.join(", "))?;
            }
        }

        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(AssistCommand::Quit) => return Ok(()),
            Ok(AssistCommand::New) => {
                let dictionary = Arc::clone(player.dictionary());
                player.reset(dictionary, max_guesses);
                writeln!(out, "New game started.\n")?;
            }
            Ok(AssistCommand::Undo) => match player.undo() {
                Some((guess, _)) => writeln!(out, "Undid {guess}.\n")?,
                None => writeln!(out, "Nothing to undo.\n")?,
            },
            Ok(AssistCommand::Solved) => {
                writeln!(
                    out,
                    "{}",
                    format!("Solved on turn {turn}!").green().bold()
                )?;
                let dictionary = Arc::clone(player.dictionary());
                player.reset(dictionary, max_guesses);
                writeln!(out, "New game started.\n")?;
            }
            Ok(AssistCommand::Report { guess, feedback }) => {
                if !player.dictionary().contains(guess.text()) {
                    writeln!(
                        out,
                        "  {} is not in the dictionary; the game would not have scored it.",
                        guess.text().bright_white()
                    )?;
                    continue;
                }
                player.observe(&guess, &feedback);
                writeln!(out, "  {guess}: {}", format_feedback(&feedback))?;
            }
            Err(message) => writeln!(out, "{} {message}", "Invalid input:".red())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FirstStrategy;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn player() -> Player<FirstStrategy> {
        let dictionary = Arc::new(Dictionary::from_strs(["bat", "cat", "cot", "dog"]));
        Player::with_dictionary(FirstStrategy, dictionary, 10)
    }

    fn run(player: &mut Player<FirstStrategy>, input: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(input.to_string());
        let mut out = Vec::new();
        run_assist(player, 10, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("quit"), Ok(AssistCommand::Quit));
        assert_eq!(parse_command(" NEW "), Ok(AssistCommand::New));
        assert_eq!(parse_command("u"), Ok(AssistCommand::Undo));
        assert_eq!(parse_command("win"), Ok(AssistCommand::Solved));
    }

    #[test]
    fn parses_reports() {
        let expected = AssistCommand::Report {
            guess: Word::new("hack"),
            feedback: Feedback::new(3, "TRD".parse().unwrap()),
        };
        assert_eq!(parse_command("hack 3 TRD"), Ok(expected.clone()));
        assert_eq!(parse_command("hack  3   [T, R, D]"), Ok(expected.clone()));
        assert_eq!(parse_command("\thack 3 T R D "), Ok(expected.clone()));
        assert_eq!(parse_command("hack 3 t,r,d"), Ok(expected));
        assert_eq!(parse_command("hack 0"), Ok(AssistCommand::Solved));
    }

    #[test]
    fn report_keeps_guess_case() {
        let Ok(AssistCommand::Report { guess, .. }) = parse_command("Paris 1 R") else {
            panic!("expected a report");
        };
        assert_eq!(guess.text(), "Paris");
        assert_eq!(parse_command("QUIT"), Ok(AssistCommand::Quit));
    }

    #[test]
    fn mixed_case_dictionary_accepts_reports() {
        let dictionary = Arc::new(Dictionary::from_strs(["Lyon", "Paris"]));
        let mut player = Player::with_dictionary(FirstStrategy, dictionary, 10);
        let feedback = Feedback::calculate(&Word::new("Paris"), &Word::new("Lyon"));
        let line = format!(
            "Paris {} {}\n",
            feedback.distance(),
            feedback.operations().to_tokens()
        );

        let out = run(&mut player, &line);

        assert!(!out.contains("not in the dictionary"));
        assert_eq!(player.history().len(), 1);
        assert_eq!(player.candidates().len(), 1);
        assert!(player.candidates().contains("Lyon"));
    }

    #[test]
    fn rejects_bad_reports() {
        assert!(parse_command("hack").is_err());
        assert!(parse_command("hack three TRD").is_err());
        assert!(parse_command("hack 2 TRD").is_err());
        assert!(parse_command("hack 1 X").is_err());
    }

    #[test]
    fn report_narrows_candidates() {
        let mut player = player();
        let out = run(&mut player, "bat 1 R\n");

        assert_eq!(player.candidates().len(), 1);
        assert!(player.candidates().contains("cat"));
        assert!(out.contains("Suggested guess: bat"));
        assert!(out.contains("Suggested guess: cat"));
    }

    #[test]
    fn undo_and_new_restore_candidates() {
        let mut player = player();
        run(&mut player, "bat 1 R\nundo\n");
        assert_eq!(player.candidates().len(), 4);

        run(&mut player, "bat 2 RR\nnew\n");
        assert_eq!(player.candidates().len(), 4);
        assert!(player.history().is_empty());
    }

    #[test]
    fn unknown_guess_is_ignored() {
        let mut player = player();
        let out = run(&mut player, "zzz 1 R\n");

        assert_eq!(player.candidates().len(), 4);
        assert!(out.contains("zzz is not in the dictionary"));
    }

    #[test]
    fn contradictory_feedback_is_reported() {
        let mut player = player();
        let out = run(&mut player, "bat 3 DDD\n");

        assert!(player.candidates().is_empty());
        assert!(out.contains("No candidates remain!"));
    }
}
