//! # Interaction Drivers
//!
//! The only code that talks to a human. A driver renders a [`Prompt`] and
//! returns the raw answer; validation and re-asking happen in
//! [`crate::prompt`].
//!
//! - [`LineDriver`] - line-based terminal I/O over any `BufRead`/`Write`
//! - [`ScriptedDriver`] - queued answers with a transcript, for tests

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};
use crate::prompt::{resolve_choice, Prompt, PromptKind};

pub trait InteractionDriver {
    /// Presents `prompt` and returns one answer.
    ///
    /// List prompts return the chosen entry when the answer is a valid
    /// number, otherwise the trimmed answer as typed.
    fn ask(&mut self, prompt: &Prompt) -> CliResult<String>;

    /// Prints informational text (menus, summaries, errors).
    fn show(&mut self, text: &str) -> CliResult<()>;
}

// =============================================================================
// Line Driver
// =============================================================================

/// Terminal driver reading one line per answer.
pub struct LineDriver<R, W> {
    input: R,
    output: W,
    /// Read masked prompts from the controlling terminal without echo.
    masked_from_tty: bool,
}

impl<R: BufRead, W: Write> LineDriver<R, W> {
    /// Driver for an interactive terminal: masked prompts bypass `input`.
    pub fn terminal(input: R, output: W) -> Self {
        LineDriver {
            input,
            output,
            masked_from_tty: true,
        }
    }

    /// Driver that reads every answer, masked or not, from `input`.
    pub fn plain(input: R, output: W) -> Self {
        LineDriver {
            input,
            output,
            masked_from_tty: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn write_question(&mut self, prompt: &Prompt) -> CliResult<()> {
        match (&prompt.kind, &prompt.default) {
            (PromptKind::Confirm, Some(default)) if default == "yes" => {
                write!(self.output, "? {} (Y/n) ", prompt.message)?
            }
            (PromptKind::Confirm, _) => write!(self.output, "? {} (y/N) ", prompt.message)?,
            (_, Some(default)) => write!(self.output, "? {} [{}] ", prompt.message, default)?,
            (_, None) => write!(self.output, "? {} ", prompt.message)?,
        }
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> InteractionDriver for LineDriver<R, W> {
    fn ask(&mut self, prompt: &Prompt) -> CliResult<String> {
        if prompt.kind == PromptKind::List {
            for (index, choice) in prompt.choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, choice)?;
            }
        }

        if prompt.kind == PromptKind::Masked && self.masked_from_tty {
            self.output.flush()?;
            return Ok(rpassword::prompt_password(format!("? {} ", prompt.message))?);
        }

        self.write_question(prompt)?;
        let answer = self.read_line()?;

        Ok(match prompt.kind {
            PromptKind::List => resolve_choice(&answer, &prompt.choices),
            _ => answer,
        })
    }

    fn show(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

// =============================================================================
// Scripted Driver
// =============================================================================

/// Replays a fixed list of answers and records what was asked and shown.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    answers: VecDeque<String>,
    asked: Vec<String>,
    shown: Vec<String>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedDriver {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Messages of every prompt asked, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Everything passed to `show`, in order.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InteractionDriver for ScriptedDriver {
    fn ask(&mut self, prompt: &Prompt) -> CliResult<String> {
        self.asked.push(prompt.message.clone());
        let answer = self.answers.pop_front().ok_or(CliError::InputClosed)?;

        Ok(match prompt.kind {
            PromptKind::List => resolve_choice(&answer, &prompt.choices),
            _ => answer,
        })
    }

    fn show(&mut self, text: &str) -> CliResult<()> {
        self.shown.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_driver_renders_numbered_choices() {
        let mut driver = LineDriver::plain(Cursor::new("2\n"), Vec::new());
        let prompt = Prompt::list(
            "Select an item",
            vec!["Kheer - Rs 799".to_string(), "Chai - Rs 150".to_string()],
        );

        assert_eq!(driver.ask(&prompt).unwrap(), "Chai - Rs 150");

        let output = String::from_utf8(driver.into_output()).unwrap();
        assert!(output.contains("  1) Kheer - Rs 799\n"));
        assert!(output.contains("  2) Chai - Rs 150\n"));
        assert!(output.ends_with("? Select an item "));
    }

    #[test]
    fn test_line_driver_strips_line_endings() {
        let mut driver = LineDriver::plain(Cursor::new("Ayesha\r\n"), Vec::new());
        assert_eq!(driver.ask(&Prompt::text("Name")).unwrap(), "Ayesha");
    }

    #[test]
    fn test_line_driver_plain_reads_masked_from_input() {
        let mut driver = LineDriver::plain(Cursor::new("1234\n"), Vec::new());
        assert_eq!(driver.ask(&Prompt::masked("PIN")).unwrap(), "1234");
    }

    #[test]
    fn test_line_driver_confirm_hint() {
        let mut driver = LineDriver::plain(Cursor::new("\n"), Vec::new());
        driver.ask(&Prompt::confirm("Add more?", false)).unwrap();
        let output = String::from_utf8(driver.into_output()).unwrap();
        assert_eq!(output, "? Add more? (y/N) ");
    }

    #[test]
    fn test_line_driver_eof_is_input_closed() {
        let mut driver = LineDriver::plain(Cursor::new(""), Vec::new());
        assert!(matches!(
            driver.ask(&Prompt::text("Name")),
            Err(CliError::InputClosed)
        ));
    }

    #[test]
    fn test_scripted_driver_records_transcript() {
        let mut driver = ScriptedDriver::new(["Ayesha"]);
        driver.show("Welcome").unwrap();
        assert_eq!(driver.ask(&Prompt::text("Name")).unwrap(), "Ayesha");
        assert_eq!(driver.asked(), ["Name"]);
        assert_eq!(driver.shown(), ["Welcome"]);
        assert_eq!(driver.remaining(), 0);
    }
}
