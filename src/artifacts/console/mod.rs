//! Console message formatting
//!
//! All user-facing lines are built here so the actions only decide *what* to
//! say. Colors follow `colored`'s global switch, which `main` turns off for
//! non-terminal output.

use colored::Colorize;
use derive_new::new;
use std::fmt;

const HEADER_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
    Warning,
}

impl MessageKind {
    fn symbol(self) -> &'static str {
        match self {
            MessageKind::Success => "✓",
            MessageKind::Error => "✗",
            MessageKind::Info => "ℹ",
            MessageKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, new)]
pub struct Message<'m> {
    kind: MessageKind,
    text: &'m str,
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("{} {}", self.kind.symbol(), self.text);
        let line = match self.kind {
            MessageKind::Success => line.green(),
            MessageKind::Error => line.red(),
            MessageKind::Info => line.cyan(),
            MessageKind::Warning => line.yellow(),
        };

        write!(f, "{}", line)
    }
}

/// A boxed title: a rule, the centered text, and another rule.
#[derive(Debug, new)]
pub struct Header<'h> {
    title: &'h str,
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(HEADER_WIDTH);
        let title = format!("{:^width$}", self.title, width = HEADER_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule.magenta().bold())?;
        writeln!(f, "{}", title.magenta().bold())?;
        write!(f, "{}", rule.magenta().bold())
    }
}

/// A bold `label:` followed by a plain value.
pub fn labeled(label: &str, value: impl fmt::Display) -> String {
    format!("{} {}", format!("{}:", label).bold(), value)
}

/// Green check or red cross.
pub fn mark(ok: bool) -> colored::ColoredString {
    if ok { "✓".green() } else { "✗".red() }
}
