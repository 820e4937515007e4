//! Address book: every record keyed by contact name.

use crate::domain::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Rendered for an address book with no records.
const EMPTY_MARKER: &str = "[]";

/// Default look-ahead window for upcoming birthdays, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to congratulate on, moved off weekends onto the next Monday
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// All contacts, keyed by name, in insertion order.
///
/// Contact books hold a handful to a few hundred entries, so records live in
/// a `Vec` and lookups scan it. Replacing a record keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Store a record under its name.
    ///
    /// An existing record with the same name is replaced wholesale (no
    /// merge) and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position_of(record.name().as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Exact-match lookup by name, for editing phones or the birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove a record and return it.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position_of(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Contacts to congratulate within `window_days` of `today`, inclusive.
    ///
    /// Each birthday is placed in `today`'s year, or the next year once it
    /// has passed. Feb 29 falls back to Feb 28 in common years. A Saturday
    /// or Sunday moves to the following Monday, and the window applies to
    /// the moved date. Results are ordered by date, then by name.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let congratulation_date = congratulation_date(next_occurrence(birthday, today)?)?;
                let delta = (congratulation_date - today).num_days();

                (0..=window_days)
                    .contains(&delta)
                    .then(|| UpcomingBirthday {
                        name: record.name().to_string(),
                        congratulation_date,
                    })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

/// The birthday's month and day in `year`, with Feb 29 mapped to Feb 28
/// when `year` is not a leap year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// The first occurrence of the birthday on or after `today`.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday.
fn congratulation_date(occurrence: NaiveDate) -> Option<NaiveDate> {
    match occurrence.weekday() {
        Weekday::Sat => occurrence.checked_add_days(Days::new(2)),
        Weekday::Sun => occurrence.checked_add_days(Days::new(1)),
        _ => Some(occurrence),
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "{}", EMPTY_MARKER);
        }

        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    /// Later records replace earlier ones with the same name.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
