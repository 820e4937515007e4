//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The only accepted textual date format (chrono syntax).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// Two-digit day, two-digit month, four-digit year.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Birthdays are parsed strictly from `DD.MM.YYYY` and must name a real
/// calendar date. The normalised text is kept alongside the structured date
/// so that rendering and serialization never re-format.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2000");
/// assert_eq!(birthday.date().month(), 2);
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the trimmed input does not
    /// match the format exactly or names an impossible date.
    pub fn new(birthday: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = birthday.as_ref();
        let date = Self::parse(raw.trim())
            .ok_or_else(|| ValidationError::InvalidBirthday(raw.to_string()))?;
        Ok(Self::from_date(date))
    }

    fn parse(text: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_REGEX.captures(text)?;
        let day = caps[1].parse::<u32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let year = caps[3].parse::<i32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    // Only called with dates parsed from four-digit years.
    fn from_date(date: NaiveDate) -> Self {
        Self {
            text: date.format(DATE_FORMAT).to_string(),
            date,
        }
    }

    /// The structured calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Get the normalised `DD.MM.YYYY` text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert into the normalised text.
    pub fn into_inner(self) -> String {
        self.text
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
