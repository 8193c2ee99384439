//! Text rules applied before a todo reaches the store.

use thiserror::Error;

/// Why todo text was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing left after trimming
    #[error("Todo text cannot be empty")]
    Empty,

    /// Shorter than the configured minimum
    #[error("Todo text must be at least {min} character long")]
    TooShort {
        /// Minimum length in characters
        min: usize,
    },

    /// Longer than the configured maximum
    #[error("Todo text cannot exceed {max} characters")]
    TooLong {
        /// Maximum length in characters
        max: usize,
    },
}

/// Length bounds for todo text, counted in characters after trimming
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum length, at least 1
    pub min_len: usize,
    /// Maximum length
    pub max_len: usize,
}

impl ValidationRules {
    /// Default minimum length
    pub const DEFAULT_MIN_LEN: usize = 1;
    /// Default maximum length
    pub const DEFAULT_MAX_LEN: usize = 500;

    /// Creates rules with the given bounds
    #[must_use]
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Trims `raw` and checks it against the bounds
    ///
    /// Returns the trimmed text on success.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the violated bound.
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_todo::validation::{ValidationError, ValidationRules};
    ///
    /// let rules = ValidationRules::default();
    /// assert_eq!(rules.validate("  Buy milk "), Ok("Buy milk".to_string()));
    /// assert_eq!(rules.validate("   "), Err(ValidationError::Empty));
    /// ```
    pub fn validate(&self, raw: &str) -> Result<String, ValidationError> {
        let text = raw.trim();
        let len = text.chars().count();

        if len == 0 {
            return Err(ValidationError::Empty);
        }
        if len < self.min_len {
            return Err(ValidationError::TooShort { min: self.min_len });
        }
        if len > self.max_len {
            return Err(ValidationError::TooLong { max: self.max_len });
        }

        Ok(text.to_string())
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN, Self::DEFAULT_MAX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tickbox_testing::properties::raw_text;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            ValidationRules::default().validate("\t Buy milk \n"),
            Ok("Buy milk".to_string())
        );
    }

    #[test]
    fn rejects_blank_text() {
        let rules = ValidationRules::default();
        assert_eq!(rules.validate(""), Err(ValidationError::Empty));
        assert_eq!(rules.validate(" \t\n "), Err(ValidationError::Empty));
    }

    #[test]
    fn enforces_bounds() {
        let rules = ValidationRules::new(3, 5);
        assert_eq!(rules.validate("ab"), Err(ValidationError::TooShort { min: 3 }));
        assert_eq!(rules.validate("abcdef"), Err(ValidationError::TooLong { max: 5 }));
        assert_eq!(rules.validate("abcde"), Ok("abcde".to_string()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let rules = ValidationRules::new(1, 3);
        assert_eq!(rules.validate("äöü"), Ok("äöü".to_string()));
    }

    #[test]
    fn max_length_boundary() {
        let rules = ValidationRules::default();
        assert!(rules.validate(&"a".repeat(500)).is_ok());
        assert_eq!(
            rules.validate(&"a".repeat(501)),
            Err(ValidationError::TooLong { max: 500 })
        );
    }

    #[test]
    fn messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Todo text cannot be empty");
        assert_eq!(
            ValidationError::TooShort { min: 1 }.to_string(),
            "Todo text must be at least 1 character long"
        );
        assert_eq!(
            ValidationError::TooLong { max: 500 }.to_string(),
            "Todo text cannot exceed 500 characters"
        );
    }

    proptest! {
        #[test]
        fn accepted_text_is_trimmed(raw in raw_text(500)) {
            let text = ValidationRules::default().validate(&raw).unwrap();
            prop_assert_eq!(text.as_str(), raw.trim());
        }
    }
}
