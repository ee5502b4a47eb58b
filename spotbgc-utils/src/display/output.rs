//! Command summaries and status lines

use colored::*;
use std::fmt::Display;

/// Kind of a one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
}

/// Status line with a coloured glyph prefix
pub fn format_status(status: Status, msg: &str) -> String {
    match status {
        Status::Success => format!("{} {}", "✓".green(), msg.green()),
        Status::Info => format!("{} {}", "●".blue(), msg),
        Status::Warning => format!("{} {}", "⚠".yellow(), msg.yellow()),
    }
}

/// Print a status line to stderr
pub fn report(status: Status, msg: &str) {
    eprintln!("{}", format_status(status, msg));
}

/// Titled list of `label: value` lines printed after a command finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    title: String,
    items: Vec<(String, String)>,
}

impl Summary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, label: impl Into<String>, value: impl Display) -> Self {
        self.items.push((label.into(), value.to_string()));
        self
    }

    /// Count rendered with thousands separators
    pub fn count(self, label: impl Into<String>, n: usize) -> Self {
        self.item(label, format_number(n))
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title.bold());
        for (i, (label, value)) in self.items.iter().enumerate() {
            let branch = if i + 1 == self.items.len() { "└─" } else { "├─" };
            out.push_str(&format!("{} {}: {}\n", branch.dimmed(), label, value));
        }
        out
    }

    /// Print to stdout
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Format a count with thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
