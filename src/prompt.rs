//! Interactive questions with defaults

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Blank answers (or end of input) yield `default`.
    pub fn ask_u32(&mut self, question: &str, default: u32) -> Result<u32> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse()
            .with_context(|| format!("Not a whole number of pixels: {:?}", answer))
    }

    pub fn ask_path(&mut self, question: &str, default: &str) -> Result<PathBuf> {
        let answer = self.ask(question)?;
        Ok(PathBuf::from(if answer.is_empty() { default } else { answer.as_str() }))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_answers_and_defaults() -> Result<()> {
        let mut shown = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("640\n\n photos \n"), &mut shown);

        assert_eq!(prompter.ask_u32("w? ", 500)?, 640);
        assert_eq!(prompter.ask_u32("h? ", 500)?, 500);
        assert_eq!(prompter.ask_path("dir? ", "./images/")?, PathBuf::from("photos"));
        assert_eq!(prompter.ask_path("again? ", "./images/")?, PathBuf::from("./images/"));

        drop(prompter);
        assert_eq!(String::from_utf8(shown)?, "w? h? dir? again? ");
        Ok(())
    }

    #[test]
    fn test_rejects_non_numbers() {
        let mut prompter = Prompter::new(Cursor::new("wide\n"), Vec::new());
        assert!(prompter.ask_u32("w? ", 500).is_err());
    }
}
