//! # Console
//!
//! Line-oriented prompt/response I/O. The ordering flow only ever talks to a
//! [`Console`], so it can run against the real terminal or a scripted one.

use crate::error::{PizzeriaError, PizzeriaResult};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt/response capability used by the ordering flow
pub trait Console {
    /// Show `prompt` and block until the next line of input.
    ///
    /// The returned line has its trailing newline removed. End of input is
    /// an error: there is nobody left to answer the prompt.
    fn read_line(&mut self, prompt: &str) -> PizzeriaResult<String>;

    /// Print one line of output
    fn write_line(&mut self, line: &str) -> PizzeriaResult<()>;
}

/// Console over any reader/writer pair
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> PizzeriaResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PizzeriaError::InputClosed {
                prompt: prompt.to_string(),
            });
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> PizzeriaResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Console fed from a fixed list of answers, recording everything shown.
///
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed so far, prompts included, one entry per line
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check whether any printed line contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Count printed lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> PizzeriaResult<String> {
        self.transcript.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| PizzeriaError::InputClosed {
                prompt: prompt.to_string(),
            })
    }

    fn write_line(&mut self, line: &str) -> PizzeriaResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_console_reads_lines() {
        let input = "1\r\nМаргарита\n".as_bytes();
        let mut output = Vec::new();
        let mut console = StdConsole::new(input, &mut output);

        assert_eq!(console.read_line("> ").unwrap(), "1");
        assert_eq!(console.read_line("name: ").unwrap(), "Маргарита");
        assert!(matches!(
            console.read_line("again: "),
            Err(PizzeriaError::InputClosed { .. })
        ));
        console.write_line("done").unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "> name: again: done\n");
    }

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["y", "0"]);

        assert_eq!(console.read_line("first").unwrap(), "y");
        console.write_line("hello").unwrap();
        assert_eq!(console.remaining(), 1);
        assert_eq!(console.read_line("second").unwrap(), "0");
        assert!(console.read_line("third").is_err());

        assert_eq!(console.transcript(), ["first", "hello", "second", "third"]);
        assert!(console.printed("hell"));
        assert_eq!(console.count("d"), 2);
    }
}
