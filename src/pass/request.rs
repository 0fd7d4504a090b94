//! Generation requests and length validation.

use super::charset::Category;
use crate::error::{Error, Result};

/// Longest password a request may ask for.
pub const MAX_LENGTH: usize = 4096;

/// How categories are chosen for each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits only. Category flags do not apply.
    NumericOnly,
    /// Category-first sampling. Letters cannot be switched off.
    Mixed {
        allow_numbers: bool,
        allow_symbols: bool,
    },
}

impl Mode {
    pub fn allows(&self, category: Category) -> bool {
        match (self, category) {
            (Mode::NumericOnly, Category::Digits) => true,
            (Mode::NumericOnly, _) => false,
            (Mode::Mixed { allow_numbers, .. }, Category::Digits) => *allow_numbers,
            (Mode::Mixed { allow_symbols, .. }, Category::Symbols) => *allow_symbols,
            (Mode::Mixed { .. }, Category::Letters) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub mode: Mode,
}

impl GenerationRequest {
    pub fn new(
        length: usize,
        numeric_only: bool,
        allow_numbers: bool,
        allow_symbols: bool,
    ) -> Self {
        let mode = if numeric_only {
            Mode::NumericOnly
        } else {
            Mode::Mixed {
                allow_numbers,
                allow_symbols,
            }
        };
        Self { length, mode }
    }
}

/// Parse a user-supplied length. Zero is accepted and yields an empty password.
pub fn parse_length(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("length is required".into()));
    }
    if let Some(rest) = trimmed.strip_prefix('-')
        && !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit())
    {
        return Err(Error::Validation(format!("{trimmed} is negative")));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Validation(format!("{trimmed} is not a whole number")));
    }

    // All digits: anything that does not fit a usize is also over the bound.
    let length = trimmed.parse::<usize>().unwrap_or(usize::MAX);
    check_length(length)
}

/// Reject lengths above [`MAX_LENGTH`].
pub fn check_length(length: usize) -> Result<usize> {
    if length > MAX_LENGTH {
        return Err(Error::Validation(format!("{length} is longer than {MAX_LENGTH}")));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_only_ignores_flags() {
        let req = GenerationRequest::new(8, true, false, true);
        assert_eq!(req.mode, Mode::NumericOnly);
        assert!(req.mode.allows(Category::Digits));
        assert!(!req.mode.allows(Category::Symbols));
        assert!(!req.mode.allows(Category::Letters));
    }

    #[test]
    fn letters_always_allowed_in_mixed() {
        for (numbers, symbols) in [(true, true), (true, false), (false, true), (false, false)] {
            let req = GenerationRequest::new(4, false, numbers, symbols);
            assert!(req.mode.allows(Category::Letters));
            assert_eq!(req.mode.allows(Category::Digits), numbers);
            assert_eq!(req.mode.allows(Category::Symbols), symbols);
            assert!(Category::ALL.iter().any(|c| req.mode.allows(*c)));
        }
    }

    #[test]
    fn parse_length_accepts_zero_and_positive() {
        assert_eq!(parse_length("0").unwrap(), 0);
        assert_eq!(parse_length(" 12 ").unwrap(), 12);
    }

    #[test]
    fn parse_length_rejects_bad_input() {
        for raw in ["", "   ", "-", "-3", "abc", "1.5", "12x", "+5"] {
            assert!(
                matches!(parse_length(raw), Err(Error::Validation(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn parse_length_enforces_upper_bound() {
        assert_eq!(parse_length("4096").unwrap(), MAX_LENGTH);
        for raw in ["4097", "18446744073709551615", "99999999999999999999999"] {
            assert!(
                matches!(parse_length(raw), Err(Error::Validation(_))),
                "accepted {raw:?}"
            );
        }
        assert!(check_length(MAX_LENGTH + 1).is_err());
        assert_eq!(check_length(0).unwrap(), 0);
    }
}
