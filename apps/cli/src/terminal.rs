//! # Terminal
//!
//! The only place that touches stdin/stdout. Record operations talk to the
//! [`Terminal`] trait, so they run the same against a real console or a
//! scripted one in tests.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Record Operation                                                       │
//! │       │  read_line("Quantity available: ")                             │
//! │       │  write_line(Tone::Success, "Product registered ...")           │
//! │       ▼                                                                 │
//! │  Terminal trait                                                         │
//! │   ├── StdTerminal       stdin + stdout, tones painted with `colored`   │
//! │   └── ScriptedTerminal  queued input lines, captured plain output      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use colored::{ColoredString, Colorize};
use std::io::{self, BufRead, Write};

/// Presentation hint for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section title of a record operation.
    Heading,
    /// Main menu title.
    MenuTitle,
    /// A selectable menu entry.
    MenuOption,
    /// The exit menu entry.
    MenuExit,
    Success,
    /// Neutral outcome ("none found", "leave blank to keep").
    Notice,
    Failure,
    /// Table header and separator.
    TableHeader,
    Plain,
    Farewell,
}

/// Line-oriented console.
pub trait Terminal {
    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes one line of output.
    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()>;
}

// =============================================================================
// Standard Terminal
// =============================================================================

/// Terminal backed by the process stdin/stdout.
#[derive(Debug)]
pub struct StdTerminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        StdTerminal {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        StdTerminal::new()
    }
}

fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Heading => text.cyan(),
        Tone::MenuTitle => text.yellow().bold(),
        Tone::MenuOption | Tone::Success => text.green(),
        Tone::MenuExit | Tone::Failure => text.red(),
        Tone::Notice => text.yellow(),
        Tone::TableHeader => text.blue(),
        Tone::Farewell => text.magenta(),
        Tone::Plain => text.normal(),
    }
}

impl Terminal for StdTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.stdout.lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{}", paint(tone, text))
    }
}

// =============================================================================
// Scripted Terminal (tests)
// =============================================================================

#[cfg(test)]
pub(crate) use scripted::ScriptedTerminal;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_terminal_replays_then_ends() {
        let mut term = ScriptedTerminal::new(&["first"]);

        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(term.read_line("> ").unwrap(), None);
        assert_eq!(term.prompts, vec!["> ", "> "]);
    }

    #[test]
    fn test_paint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(paint(Tone::Failure, "boom").to_string(), "boom");
        colored::control::unset_override();
    }
}
