//! Terminal output for search runs.
//!
//! Colors and icons are only used when stdout is a terminal, so piped output
//! stays plain.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::runner::RunSummary;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Render a status line, colored when `color` is set.
pub fn status_line(status: Status, msg: &str, color: bool) -> String {
    if !color {
        return msg.to_string();
    }

    let icon = status_icon(status);
    match status {
        Status::Success => format!("{} {}", icon.green().bold(), msg),
        Status::Error => format!("{} {}", icon.red().bold(), msg),
        Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
        Status::Info => format!("{} {}", icon.cyan().bold(), msg),
        Status::Search => format!("{} {}", icon.yellow(), msg),
    }
}

/// Print a styled status message to stdout.
pub fn print_status(status: Status, msg: &str) {
    println!("{}", status_line(status, msg, is_terminal()));
}

/// Print a styled error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!(
        "{}",
        status_line(Status::Error, msg, std::io::stderr().is_terminal())
    );
}

/// Format a number with commas.
pub fn format_number(n: usize) -> String {
    n.to_string()
        .chars()
        .rev()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Summary lines for a finished run.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!("Response saved to {}", summary.output_path.display())];
    if let Some(path) = &summary.email_path {
        lines.push(format!("Emails saved to {}", path.display()));
    }
    if let Some(path) = &summary.password_path {
        lines.push(format!("Passwords saved to {}", path.display()));
    }
    lines.push(format!("Emails: {}", format_number(summary.emails)));
    lines.push(format!("Passwords: {}", format_number(summary.passwords)));
    lines.push(format!(
        "Total results: {} (Maximum: {})",
        format_number(summary.total),
        format_number(summary.max_results)
    ));
    lines
}

/// Print the run summary as status lines.
pub fn print_summary(summary: &RunSummary) {
    let lines = summary_lines(summary);
    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        let status = if i == last && summary.hit_limit() {
            Status::Warning
        } else if i == last {
            Status::Info
        } else {
            Status::Success
        };
        print_status(status, line);
    }
}
