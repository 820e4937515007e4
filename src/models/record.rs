//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use std::fmt;

/// Rendered in place of an empty phone list or an unset birthday.
const PLACEHOLDER: &str = "-";

/// Separator between phone numbers in a rendered record.
const PHONE_SEPARATOR: &str = " ; ";

/// A contact: one name, any number of phones and an optional birthday.
///
/// Phones keep their insertion order and duplicates are allowed. The name
/// is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(Name::new(name)?, Vec::new(), None))
    }

    /// Assemble a record from already validated fields.
    pub fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Find a stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// The record is left untouched if `old_phone` is absent or `new_phone`
    /// is invalid.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        let replacement = Phone::new(new_phone)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(PHONE_SEPARATOR)
        };
        let birthday = self
            .birthday
            .as_ref()
            .map(Birthday::as_str)
            .unwrap_or(PLACEHOLDER);

        write!(
            f,
            "{}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
