//! Prompting for suffix and naming style
//!
//! [`TerminalPrompter`] asks on an output stream and reads answers line by line. End
//! of input cancels. [`DefaultPrompter`] answers without asking, for piped input.

use dtogen_core::config::is_identifier_tail;
use dtogen_core::{NamingStyle, Prompter};
use std::io::{BufRead, Write};

/// Interactive prompter over any line reader and writer.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one answer. `None` on end of input or I/O failure.
    fn ask(&mut self, question: &str) -> Option<String> {
        write!(self.output, "{question}").ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn suffix(&mut self, default: &str) -> Option<String> {
        loop {
            let answer = self.ask(&format!("Class name suffix [{default}]: "))?;
            if answer.is_empty() {
                return Some(default.to_string());
            }
            if is_identifier_tail(&answer) {
                return Some(answer);
            }
            self.say("Suffix may contain only letters, digits, '_' or '$'.");
        }
    }

    fn naming_style(&mut self, choices: &[NamingStyle]) -> Option<NamingStyle> {
        for (i, style) in choices.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, style));
        }

        loop {
            let answer = self.ask(&format!(
                "Naming style [1-{}, default {}]: ",
                choices.len(),
                NamingStyle::default()
            ))?;
            if answer.is_empty() {
                return Some(NamingStyle::default());
            }
            if let Some(style) = parse_choice(&answer, choices) {
                return Some(style);
            }
            self.say(&format!("Unknown naming style: {answer}"));
        }
    }
}

/// A 1-based index into `choices` or a style label.
fn parse_choice(answer: &str, choices: &[NamingStyle]) -> Option<NamingStyle> {
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| choices.get(i)).copied();
    }
    answer
        .parse::<NamingStyle>()
        .ok()
        .filter(|style| choices.contains(style))
}

/// Non-interactive prompter: the offered default suffix and the default style.
#[derive(Debug, Default)]
pub struct DefaultPrompter;

impl Prompter for DefaultPrompter {
    fn suffix(&mut self, default: &str) -> Option<String> {
        Some(default.to_string())
    }

    fn naming_style(&mut self, _choices: &[NamingStyle]) -> Option<NamingStyle> {
        Some(NamingStyle::default())
    }
}
