//! # Prompter
//!
//! The abstract input/output boundary the session talks through.
//!
//! Free-text lines and bounded integer selections come from any
//! `BufRead`; prompts and the order transcript go to any `Write`. In
//! production that is stdin/stdout; in tests a scripted `Cursor` and a
//! `Vec<u8>`.

use std::io::{self, BufRead, Write};

use tracing::warn;

/// Terminal prompt reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// The underlying writer, for callers that emit their own output
    /// (menus, banners, the workflow transcript).
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts for and reads one free-text line, trimmed.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(buf.trim().to_string())
    }

    /// Prompts for a numeric menu selection.
    ///
    /// Unparseable input becomes -1, which no selection maps, so it
    /// falls through to the same default arm as any other
    /// out-of-range number.
    pub fn choice(&mut self, prompt: &str) -> io::Result<i64> {
        let raw = self.line(prompt)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            warn!(input = %raw, "not a number, falling back to the default choice");
            -1
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn test_line_trims_and_echoes_prompt() {
        let mut p = prompter("  Alice  \n");
        assert_eq!(p.line("Enter name: ").unwrap(), "Alice");
        assert_eq!(String::from_utf8(p.output).unwrap(), "Enter name: ");
    }

    #[test]
    fn test_choice_parses_numbers() {
        let mut p = prompter("2\n-7\n");
        assert_eq!(p.choice("? ").unwrap(), 2);
        assert_eq!(p.choice("? ").unwrap(), -7);
    }

    #[test]
    fn test_unparseable_choice_falls_back() {
        let mut p = prompter("abc\n\n");
        assert_eq!(p.choice("? ").unwrap(), -1);
        assert_eq!(p.choice("? ").unwrap(), -1); // empty line too
    }
}
