//! Input validators for interactive prompts
//!
//! Pure predicate checks applied by the prompting layer before accepting
//! input. A failure carries the user-facing message and the cursor position
//! (end of input) for re-prompting.

use std::collections::HashSet;

/// Validation failure with a message and cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub cursor: usize,
}

impl ValidationError {
    fn at_end(message: &str, text: &str) -> Self {
        Self {
            message: message.to_string(),
            cursor: text.len(),
        }
    }
}

/// A pure, synchronous input check
pub trait Validate {
    fn check(&self, text: &str) -> Result<(), ValidationError>;
}

/// Accepts iff the text parses as a finite float
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatValidator;

impl Validate for FloatValidator {
    fn check(&self, text: &str) -> Result<(), ValidationError> {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(()),
            _ => Err(ValidationError::at_end(
                "Please enter a valid float number",
                text,
            )),
        }
    }
}

/// Like [`FloatValidator`] but treats the empty string as valid
///
/// Used for "leave blank to keep the previous value" prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatOrBlankValidator;

impl Validate for FloatOrBlankValidator {
    fn check(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return Ok(());
        }
        FloatValidator.check(text)
    }
}

/// Accepts iff the text is a member of the allowed currency set
///
/// Parameterized by the set at construction time so the same validator value
/// can be reused across prompts.
#[derive(Debug, Clone)]
pub struct CurrencyValidator {
    allowed: HashSet<String>,
}

impl CurrencyValidator {
    pub fn new(allowed: &[String]) -> Self {
        Self {
            allowed: allowed.iter().cloned().collect(),
        }
    }
}

impl Validate for CurrencyValidator {
    fn check(&self, text: &str) -> Result<(), ValidationError> {
        if self.allowed.contains(text) {
            Ok(())
        } else {
            Err(ValidationError::at_end("Unknown currency", text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_validator() {
        assert!(FloatValidator.check("1.5").is_ok());
        assert!(FloatValidator.check("-0.25").is_ok());
        assert!(FloatValidator.check(" 42 ").is_ok());
        assert!(FloatValidator.check("abc").is_err());
        assert!(FloatValidator.check("").is_err());
        assert!(FloatValidator.check("inf").is_err());
        assert!(FloatValidator.check("NaN").is_err());
    }

    #[test]
    fn test_float_validator_cursor_at_end() {
        let err = FloatValidator.check("abc").unwrap_err();
        assert_eq!(err.cursor, 3);
        assert_eq!(err.message, "Please enter a valid float number");
    }

    #[test]
    fn test_float_or_blank_validator() {
        assert!(FloatOrBlankValidator.check("").is_ok());
        assert!(FloatOrBlankValidator.check("1.5").is_ok());
        assert!(FloatOrBlankValidator.check("abc").is_err());
    }

    #[test]
    fn test_currency_validator() {
        let currencies = vec!["BTC".to_string(), "ETH".to_string()];
        let validator = CurrencyValidator::new(&currencies);

        for c in &currencies {
            assert!(validator.check(c).is_ok());
        }

        let err = validator.check("DOGE").unwrap_err();
        assert_eq!(err.message, "Unknown currency");
        assert_eq!(err.cursor, 4);

        assert!(validator.check("").is_err());
        assert!(validator.check("btc").is_err());
    }
}
