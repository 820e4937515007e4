//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record, including the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use record::Record;
