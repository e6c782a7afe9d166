//! # Prompts
//!
//! One explicit configuration value per question, plus the loops that keep
//! asking until an answer is acceptable.
//!
//! ## Prompt Kinds
//! ```text
//! ┌──────────┬─────────────────────────────────────────────────────────┐
//! │ List     │ pick one of `choices` (by number or exact text)         │
//! │ Text     │ free text, optionally checked by `validator`            │
//! │ Masked   │ like Text, input not echoed (PIN)                       │
//! │ Confirm  │ yes/no, empty answer falls back to `default`            │
//! └──────────┴─────────────────────────────────────────────────────────┘
//! ```
//!
//! Re-asking is an explicit loop with one exit: an accepted answer. The only
//! other way out is an error from the driver (closed input, broken terminal).

use std::fmt;

use tracing::debug;

use bistro_core::ValidationError;

use crate::driver::InteractionDriver;
use crate::error::CliResult;

/// Checks a raw answer; the error text is shown before asking again.
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    List,
    Text,
    Masked,
    Confirm,
}

pub struct Prompt {
    pub kind: PromptKind,
    pub message: String,
    pub choices: Vec<String>,
    pub validator: Option<Validator>,
    pub default: Option<String>,
}

impl Prompt {
    fn new(kind: PromptKind, message: impl Into<String>) -> Self {
        Prompt {
            kind,
            message: message.into(),
            choices: Vec::new(),
            validator: None,
            default: None,
        }
    }

    pub fn list(message: impl Into<String>, choices: Vec<String>) -> Self {
        Prompt {
            choices,
            ..Self::new(PromptKind::List, message)
        }
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self::new(PromptKind::Text, message)
    }

    pub fn masked(message: impl Into<String>) -> Self {
        Self::new(PromptKind::Masked, message)
    }

    pub fn confirm(message: impl Into<String>, default: bool) -> Self {
        Prompt {
            default: Some(if default { "yes" } else { "no" }.to_string()),
            ..Self::new(PromptKind::Confirm, message)
        }
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), ValidationError> + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Runs the validator, if any.
    pub fn check(&self, answer: &str) -> Result<(), ValidationError> {
        match &self.validator {
            Some(validator) => validator(answer),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("choices", &self.choices)
            .field("validator", &self.validator.is_some())
            .field("default", &self.default)
            .finish()
    }
}

/// Maps a list answer to a choice: `"2"` picks the second entry, anything
/// else is returned trimmed and left for the caller to resolve.
pub fn resolve_choice(answer: &str, choices: &[String]) -> String {
    let answer = answer.trim();
    match answer.parse::<usize>() {
        Ok(n) if (1..=choices.len()).contains(&n) => choices[n - 1].clone(),
        _ => answer.to_string(),
    }
}

/// Interprets a yes/no answer. `None` means "ask again".
pub fn parse_confirm(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Asking Loops
// =============================================================================

/// Asks a text, masked or list prompt until its validator accepts.
///
/// An empty answer takes the prompt's default when one is set.
pub fn ask_until_valid<D>(driver: &mut D, prompt: &Prompt) -> CliResult<String>
where
    D: InteractionDriver + ?Sized,
{
    loop {
        let mut answer = driver.ask(prompt)?;
        if answer.trim().is_empty() {
            if let Some(default) = &prompt.default {
                answer = default.clone();
            }
        }

        match prompt.check(&answer) {
            Ok(()) => return Ok(answer),
            Err(err) => {
                // Masked answers never reach the log.
                if prompt.kind == PromptKind::Masked {
                    debug!(prompt = %prompt.message, "masked answer rejected");
                } else {
                    debug!(prompt = %prompt.message, %answer, "answer rejected");
                }
                driver.show(&format!("  ✗ {err}"))?;
            }
        }
    }
}

/// Asks a yes/no question until the answer is recognisable.
pub fn ask_confirm<D>(driver: &mut D, prompt: &Prompt) -> CliResult<bool>
where
    D: InteractionDriver + ?Sized,
{
    loop {
        let answer = driver.ask(prompt)?;
        let answer = match (answer.trim().is_empty(), &prompt.default) {
            (true, Some(default)) => default.clone(),
            _ => answer,
        };

        if let Some(yes) = parse_confirm(&answer) {
            return Ok(yes);
        }
        driver.show("  ✗ Please answer yes or no")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ScriptedDriver;
    use bistro_core::validation::parse_quantity;

    fn choices() -> Vec<String> {
        vec!["Kheer - Rs 799".to_string(), "Chai - Rs 150".to_string()]
    }

    #[test]
    fn test_resolve_choice_by_number_or_text() {
        assert_eq!(resolve_choice("2", &choices()), "Chai - Rs 150");
        assert_eq!(resolve_choice(" Kheer - Rs 799 ", &choices()), "Kheer - Rs 799");
        assert_eq!(resolve_choice("3", &choices()), "3");
        assert_eq!(resolve_choice("0", &choices()), "0");
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_confirm("Y"), Some(true));
        assert_eq!(parse_confirm("yes"), Some(true));
        assert_eq!(parse_confirm(" no "), Some(false));
        assert_eq!(parse_confirm("maybe"), None);
    }

    #[test]
    fn test_ask_until_valid_repeats_same_prompt() {
        let mut driver = ScriptedDriver::new(["0", "abc", "3.5", "2"]);
        let prompt = Prompt::text("Quantity").with_validator(|s| parse_quantity(s).map(|_| ()));

        let answer = ask_until_valid(&mut driver, &prompt).unwrap();
        assert_eq!(answer, "2");
        assert_eq!(driver.asked().iter().filter(|m| *m == "Quantity").count(), 4);
        assert_eq!(driver.shown().len(), 3);
    }

    #[test]
    fn test_ask_until_valid_uses_default_on_empty() {
        let mut driver = ScriptedDriver::new([""]);
        let prompt = Prompt::text("Quantity").with_default("1");
        assert_eq!(ask_until_valid(&mut driver, &prompt).unwrap(), "1");
    }

    #[test]
    fn test_ask_confirm_default_and_retry() {
        let mut driver = ScriptedDriver::new(["", "perhaps", "n"]);
        assert!(ask_confirm(&mut driver, &Prompt::confirm("Continue?", true)).unwrap());
        assert!(!ask_confirm(&mut driver, &Prompt::confirm("Continue?", true)).unwrap());
        assert_eq!(driver.shown(), ["  ✗ Please answer yes or no"]);
    }

    #[test]
    fn test_closed_input_stops_the_loop() {
        let mut driver = ScriptedDriver::new(["-1"]);
        let prompt = Prompt::text("Quantity").with_validator(|s| parse_quantity(s).map(|_| ()));
        assert!(matches!(
            ask_until_valid(&mut driver, &prompt),
            Err(crate::error::CliError::InputClosed)
        ));
    }
}
