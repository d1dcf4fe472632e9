//! Display functions for command results

use super::formatters::{entropy_bar, format_feedback, format_operations, format_table};
use crate::commands::{DistanceResult, GameShowStatistics, SolveResult};
use crate::game::GameState;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        match &step.feedback {
            Some(feedback) => println!("\nTurn {turn}: {} {}", step.word, format_feedback(feedback)),
            None => println!("\nTurn {turn}: {} {}", step.word, "solved".green().bold()),
        }

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                // Information actually gained from the feedback
                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    match result.state {
        GameState::Won => println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        GameState::Abandoned => println!(
            "{}",
            format!(
                "No candidates left after {} guesses",
                result.steps.len()
            )
            .red()
            .bold()
        ),
        _ => println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the distance between two words with its table
pub fn print_distance_result(result: &DistanceResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "EDIT DISTANCE:".bright_cyan().bold(),
        result.source.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Distance:    {}",
        result.distance.to_string().bright_yellow().bold()
    );
    println!("   Operations:  {}", format_operations(&result.operations));
    println!(
        "   Reversed:    {}",
        format_operations(&result.reverse_operations)
    );

    println!("\n{}", format_table(&result.table, &result.source, &result.target));

    if let Some(metrics) = &result.opening_metrics {
        println!("📊 {} as an opening guess:", result.source.bright_white().bold());
        println!(
            "   Entropy:     [{}] {}",
            entropy_bar(metrics.entropy, result.dictionary_len, 30).green(),
            format!("{:.3} bits", metrics.entropy).bright_yellow()
        );
        println!(
            "   Expected:    {:.1} candidates remain",
            metrics.expected_remaining
        );
        println!("   Worst case:  {} candidates", metrics.max_partition);
    }
}

/// Print game show statistics
pub fn print_game_show_statistics(stats: &GameShowStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Game Show Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Rounds played:       {}", stats.rounds);
    println!(
        "  Won:                 {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_ratio() * 100.0).green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.exhausted,
            format!(
                "({:.1}%)",
                stats.exhausted as f64 / stats.rounds.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    if stats.abandoned > 0 {
        println!(
            "  Abandoned:           {}",
            stats.abandoned.to_string().red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per round:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.rounds.max(1) as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.wins > 0 {
            let percentage = count as f64 / stats.wins as f64 * 100.0;
            let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }
}
