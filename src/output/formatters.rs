//! Formatting utilities for terminal output

use crate::core::{DistanceTable, Feedback, Operation, OperationSequence};
use colored::{ColoredString, Colorize};

/// Color an operation token by kind
#[must_use]
pub fn colored_token(operation: Operation) -> ColoredString {
    let token = operation.token().to_string();
    match operation {
        Operation::Replace => token.yellow().bold(),
        Operation::Transpose => token.cyan().bold(),
        Operation::Insert => token.green().bold(),
        Operation::Delete => token.red().bold(),
    }
}

/// Format an operation sequence as `[T, R, D]` with colored tokens
#[must_use]
pub fn format_operations(operations: &OperationSequence) -> String {
    let tokens: Vec<String> = operations
        .iter()
        .map(|&op| colored_token(op).to_string())
        .collect();
    format!("[{}]", tokens.join(", "))
}

/// Format feedback as `distance 3 [T, R, D]`
#[must_use]
pub fn format_feedback(feedback: &Feedback) -> String {
    format!(
        "distance {} {}",
        feedback.distance().to_string().bright_yellow().bold(),
        format_operations(feedback.operations())
    )
}

/// Render a distance table with the source down the side and the target across
///
/// Cells on the final answer are highlighted.
#[must_use]
pub fn format_table(table: &DistanceTable, source: &str, target: &str) -> String {
    let width = table
        .iter_rows()
        .flatten()
        .max()
        .map_or(1, |max| max.to_string().len());

    // Header: blank corner, empty-prefix column, then the target characters
    let mut out = format!("{:>width$}  {:>width$}", "", "ε");
    for ch in target.chars() {
        out.push_str(&format!(" {ch:>width$}"));
    }
    out.push('\n');

    let labels = std::iter::once('ε').chain(source.chars());
    for (r, (label, cells)) in labels.zip(table.iter_rows()).enumerate() {
        out.push_str(&format!("{label:>width$} "));
        for (c, cell) in cells.iter().enumerate() {
            let text = format!("{cell:>width$}");
            if r == table.rows() && c == table.cols() {
                out.push_str(&format!(" {}", text.bright_green().bold()));
            } else {
                out.push(' ');
                out.push_str(&text);
            }
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
