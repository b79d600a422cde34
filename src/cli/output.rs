//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for topic identifiers
    pub fn topic(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths and document ids
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for relevance scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    let secs = duration.num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    let mins = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Shorten a line to at most `max_chars` characters, marking the cut
pub fn truncate_line(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let kept: String = line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print data as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
