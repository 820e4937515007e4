//! Command handlers.
//!
//! Each handler performs one address book operation and returns the reply
//! text, or a `BookError` that the shell turns into a message.

use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn record<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// Add a phone to a contact, creating the contact if needed.
///
/// The phone is validated first so a rejected number never leaves a new
/// contact behind.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    let phone = Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> BookResult<String> {
    record_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone updated.".to_string())
}

pub fn show_phones(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = record(book, name)?;
    if record.phones().is_empty() {
        return Ok("No phones found.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; "))
}

pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> BookResult<String> {
    record_mut(book, name)?.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(book: &AddressBook, name: &str) -> BookResult<String> {
    Ok(match record(book, name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set.".to_string(),
    })
}

pub fn birthdays(book: &AddressBook, window_days: i64, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(window_days, today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> BookResult<String> {
    record_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> BookResult<String> {
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// The reply shown for a failed command.
pub fn error_message(error: &BookError) -> String {
    match error {
        BookError::Validation(e) => format!("Error: {}", e),
        BookError::ContactNotFound(_) => "Name not found.".to_string(),
        BookError::PhoneNotFound(phone) => format!("Error: Phone {} not found.", phone),
        BookError::MissingArguments { .. } => "Not enough arguments.".to_string(),
    }
}
