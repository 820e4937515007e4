//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty after trimming.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// The provided look-ahead window is not a whole number of days.
    InvalidDayCount(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain exactly 10 digits: {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format, expected DD.MM.YYYY: {}", date)
            }
            Self::InvalidDayCount(days) => write!(f, "Number of days must be an integer: {}", days),
        }
    }
}

impl std::error::Error for ValidationError {}
