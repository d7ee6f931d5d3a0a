//! Console input and output

use crate::error::{GameError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Wraps the session's input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console. `styled` enables colors and bold headings.
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
        }
    }

    /// Whether output should carry terminal styling
    pub fn styled(&self) -> bool {
        self.styled
    }

    /// Read one line without its line ending.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Show a prompt on the current line and read the answer
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write a full line
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Get the output stream
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut console = Console::new("cat\r\n dog \n".as_bytes(), Vec::new(), false);
        assert_eq!(console.read_line().unwrap(), "cat");
        assert_eq!(console.read_line().unwrap(), " dog ");
    }

    #[test]
    fn test_end_of_input() {
        let mut console = Console::new("".as_bytes(), Vec::new(), false);
        assert!(matches!(console.read_line(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_prompt_writes_without_newline() {
        let mut console = Console::new("3\n".as_bytes(), Vec::new(), false);
        let answer = console.prompt("Number of players: ").unwrap();
        assert_eq!(answer, "3");
        assert_eq!(console.output().as_slice(), b"Number of players: ");
    }

    #[test]
    fn test_line_and_blank() {
        let mut console = Console::new("".as_bytes(), Vec::new(), false);
        console.line("ROUND 1").unwrap();
        console.blank().unwrap();
        assert_eq!(String::from_utf8_lossy(console.output()), "ROUND 1\n\n");
    }
}
