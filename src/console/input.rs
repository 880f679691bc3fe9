//! Line input sources and typed prompts

use crate::domain::{AhmsError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt;
use std::io::{BufRead, Write};

/// Source of input lines
pub trait LineReader {
    /// Shows `prompt` and reads one line without its terminator.
    ///
    /// Returns `Ok(None)` once input has ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input with line editing and history
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    /// Creates a reader bound to the controlling terminal
    ///
    /// # Errors
    ///
    /// Returns [`AhmsError::Input`] if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| AhmsError::Input(format!("failed to initialize line editor: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(AhmsError::Input(e.to_string())),
        }
    }
}

/// Reads lines from any buffered reader; prompts are not shown
pub struct ScriptedReader<R> {
    reader: R,
}

impl<R: BufRead> ScriptedReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineReader for ScriptedReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| AhmsError::Input(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Prompts with type coercion on top of a [`LineReader`], plus an output sink
pub struct Console<R, W> {
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Writes one message followed by a line break
    pub fn say(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads a text value with surrounding whitespace removed
    ///
    /// # Errors
    ///
    /// Returns [`AhmsError::InputClosed`] when input has ended.
    pub fn text(&mut self, prompt: &str) -> Result<String> {
        self.reader
            .read_line(prompt)?
            .map(|line| line.trim().to_string())
            .ok_or(AhmsError::InputClosed)
    }

    /// Reads a whole number, asking again until one is entered
    pub fn integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let raw = self.text(prompt)?;
            match raw.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(format!("'{raw}' is not a whole number, please try again."))?,
            }
        }
    }

    /// Reads a decimal number, asking again until one is entered
    pub fn decimal(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let raw = self.text(prompt)?;
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.say(format!("'{raw}' is not a number, please try again."))?,
            }
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<ScriptedReader<Cursor<Vec<u8>>>, Vec<u8>> {
        Console::new(
            ScriptedReader::new(Cursor::new(input.as_bytes().to_vec())),
            Vec::new(),
        )
    }

    #[test]
    fn test_scripted_reader_strips_terminators() {
        let mut reader = ScriptedReader::new(Cursor::new("one\r\ntwo\nthree"));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("one"));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("two"));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("three"));
        assert_eq!(reader.read_line("").unwrap(), None);
    }

    #[test]
    fn test_text_trims_and_reports_closed_input() {
        let mut console = console("  Ann Lee  \n");
        assert_eq!(console.text("Name: ").unwrap(), "Ann Lee");
        assert!(matches!(console.text("Name: "), Err(AhmsError::InputClosed)));
    }

    #[test]
    fn test_integer_reprompts() {
        let mut console = console("abc\n4.5\n42\n");
        assert_eq!(console.integer("Id: ").unwrap(), 42);
        let (_, out) = console.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("'abc' is not a whole number"));
        assert!(out.contains("'4.5' is not a whole number"));
    }

    #[test]
    fn test_decimal_reprompts() {
        let mut console = console("cheap\n12.5\n");
        assert_eq!(console.decimal("Cost: ").unwrap(), 12.5);
    }

    #[test]
    fn test_integer_input_closed() {
        let mut console = console("nope\n");
        assert!(matches!(
            console.integer("Id: "),
            Err(AhmsError::InputClosed)
        ));
    }
}
