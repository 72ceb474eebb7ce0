//! Operator prompting surface
//!
//! The setup flow talks to the operator through the [`Prompter`] trait;
//! [`TermPrompter`] is the terminal implementation backed by `dialoguer`.
//! Tests drive the flow with a scripted fake instead.

use dialoguer::{Completion, Input, Select};

use crate::error::{Error, Result};
use crate::validate::Validate;

/// Blocking operator interaction surface
pub trait Prompter {
    /// Free-text prompt
    fn input(&self, prompt: &str, allow_blank: bool) -> Result<String>;

    /// Free-text prompt gated by a validator
    ///
    /// With `allow_blank`, an empty line bypasses the validator (used for
    /// "leave blank to keep the previous value").
    fn input_validated(
        &self,
        prompt: &str,
        validator: &dyn Validate,
        allow_blank: bool,
    ) -> Result<String>;

    /// Free-text prompt with tab completion over `choices`, gated by a validator
    fn autocomplete(
        &self,
        prompt: &str,
        choices: &[String],
        validator: &dyn Validate,
        allow_blank: bool,
    ) -> Result<String>;

    /// Single-select prompt; returns the chosen item
    fn select(&self, prompt: &str, items: &[String]) -> Result<String>;
}

/// Terminal prompter backed by `dialoguer`
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, prompt: &str, allow_blank: bool) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_blank)
            .interact_text()?;
        Ok(value)
    }

    fn input_validated(
        &self,
        prompt: &str,
        validator: &dyn Validate,
        allow_blank: bool,
    ) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_blank)
            .validate_with(|text: &String| -> std::result::Result<(), String> {
                if allow_blank && text.is_empty() {
                    return Ok(());
                }
                validator.check(text).map_err(|e| e.message)
            })
            .interact_text()?;
        Ok(value)
    }

    fn autocomplete(
        &self,
        prompt: &str,
        choices: &[String],
        validator: &dyn Validate,
        allow_blank: bool,
    ) -> Result<String> {
        let completion = CodeCompletion { choices };
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_blank)
            .completion_with(&completion)
            .validate_with(|text: &String| -> std::result::Result<(), String> {
                if allow_blank && text.is_empty() {
                    return Ok(());
                }
                validator.check(text).map_err(|e| e.message)
            })
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<String> {
        if items.is_empty() {
            return Err(Error::Prompt(format!(
                "Nothing to select for '{}'",
                prompt
            )));
        }

        let idx = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(items[idx].clone())
    }
}

/// Prefix completion over a fixed list of codes
struct CodeCompletion<'a> {
    choices: &'a [String],
}

impl Completion for CodeCompletion<'_> {
    fn get(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }

        let needle = input.to_uppercase();
        let mut matches = self.choices.iter().filter(|c| c.starts_with(&needle));

        // Complete only when the prefix is unambiguous
        let first = matches.next()?;
        if matches.next().is_none() {
            Some(first.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_unambiguous_prefix() {
        let choices = vec!["BTC".to_string(), "ETH".to_string(), "ETC".to_string()];
        let completion = CodeCompletion { choices: &choices };

        assert_eq!(completion.get("bt"), Some("BTC".to_string()));
        assert_eq!(completion.get("B"), Some("BTC".to_string()));
    }

    #[test]
    fn test_completion_ambiguous_prefix_is_none() {
        let choices = vec!["ETH".to_string(), "ETC".to_string()];
        let completion = CodeCompletion { choices: &choices };

        assert_eq!(completion.get("ET"), None);
        assert_eq!(completion.get(""), None);
        assert_eq!(completion.get("X"), None);
    }
}
