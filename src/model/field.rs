use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContactResult;
use crate::validation;

/// A phone number slot. Holds either a normalized 10-digit string or
/// nothing; a failed write clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    value: Option<String>,
}

impl Phone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Validated write: strips non-digits and stores the result if
    /// exactly 10 digits remain. On failure the slot is cleared and the
    /// diagnostic is returned to the caller.
    pub fn set(&mut self, input: &str) -> ContactResult<()> {
        match validation::phone_digits(input) {
            Ok(digits) => {
                self.value = Some(digits);
                Ok(())
            }
            Err(e) => {
                self.value = None;
                Err(e)
            }
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_deref().unwrap_or(""))
    }
}

/// A birthday slot. Stores the original `YYYY-MM-DD` text as entered,
/// accepted only when it parses as a real calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    value: Option<String>,
}

impl Birthday {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Validated write: the input must parse as a `YYYY-MM-DD` calendar
    /// date. The original text is stored unchanged. On failure the slot
    /// is cleared and the diagnostic is returned.
    pub fn set(&mut self, input: &str) -> ContactResult<()> {
        match validation::birthday_date(input) {
            Ok(_) => {
                self.value = Some(input.to_string());
                Ok(())
            }
            Err(e) => {
                self.value = None;
                Err(e)
            }
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "Birthday: {}", v),
            None => Ok(()),
        }
    }
}
