//! Tests for the upcoming-birthday report.
//!
//! Dates are chosen with known weekdays: 2025-06-07 is a Saturday,
//! 2025-06-08 a Sunday, 2026-02-28 a Saturday.

use chrono::NaiveDate;
use contact_book::models::{AddressBook, Record, UpcomingBirthday};

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn contact(name: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).unwrap();
    }
    record
}

fn book(contacts: Vec<Record>) -> AddressBook {
    contacts.into_iter().collect()
}

fn summary(upcoming: &[UpcomingBirthday]) -> Vec<String> {
    upcoming.iter().map(ToString::to_string).collect()
}

#[test]
fn test_leap_day_in_common_year_falls_back_to_feb_28() {
    let book = book(vec![contact("Leap", Some("29.02.2000"))]);

    let upcoming = book.upcoming_birthdays(7, date(28, 2, 2023));

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Leap");
    assert_eq!(upcoming[0].formatted_date(), "28.02.2023");
}

#[test]
fn test_leap_day_in_leap_year_is_kept() {
    let book = book(vec![contact("Leap", Some("29.02.2000"))]);

    let upcoming = book.upcoming_birthdays(7, date(26, 2, 2024));

    assert_eq!(summary(&upcoming), vec!["Leap: 29.02.2024"]);
}

#[test]
fn test_leap_day_fallback_still_shifts_off_weekend() {
    let book = book(vec![contact("Leap", Some("29.02.2000"))]);

    // Feb 28 2026 is a Saturday
    let upcoming = book.upcoming_birthdays(7, date(25, 2, 2026));

    assert_eq!(summary(&upcoming), vec!["Leap: 02.03.2026"]);
}

#[test]
fn test_saturday_birthday_moves_to_monday() {
    let book = book(vec![contact("Sat", Some("07.06.1990"))]);

    let upcoming = book.upcoming_birthdays(7, date(2, 6, 2025));

    assert_eq!(summary(&upcoming), vec!["Sat: 09.06.2025"]);
}

#[test]
fn test_weekend_shift_can_push_out_of_window() {
    let book = book(vec![contact("Sat", Some("07.06.1990"))]);

    // The birthday itself is 5 days away, the Monday after it is 7
    let upcoming = book.upcoming_birthdays(6, date(2, 6, 2025));

    assert!(upcoming.is_empty());
}

#[test]
fn test_sunday_birthday_moves_to_monday() {
    let book = book(vec![contact("Sun", Some("08.06.1985"))]);

    let upcoming = book.upcoming_birthdays(7, date(2, 6, 2025));

    assert_eq!(summary(&upcoming), vec!["Sun: 09.06.2025"]);
}

#[test]
fn test_birthday_today_is_included() {
    let book = book(vec![contact("Today", Some("04.06.1999"))]);

    let upcoming = book.upcoming_birthdays(0, date(4, 6, 2025));

    assert_eq!(summary(&upcoming), vec!["Today: 04.06.2025"]);
}

#[test]
fn test_weekend_birthday_today_reports_monday() {
    let book = book(vec![contact("Weekend", Some("07.06.1999"))]);

    let upcoming = book.upcoming_birthdays(7, date(7, 6, 2025));

    assert_eq!(summary(&upcoming), vec!["Weekend: 09.06.2025"]);
}

#[test]
fn test_window_bounds_are_inclusive() {
    // Thursday 2025-06-12
    let book = book(vec![contact("Thu", Some("12.06.2001"))]);
    let today = date(2, 6, 2025);

    assert_eq!(book.upcoming_birthdays(10, today).len(), 1);
    assert!(book.upcoming_birthdays(9, today).is_empty());
}

#[test]
fn test_passed_birthday_rolls_to_next_year() {
    let book = book(vec![contact("Yesterday", Some("01.06.1990"))]);
    let today = date(2, 6, 2025);

    assert!(book.upcoming_birthdays(7, today).is_empty());

    // 2026-06-01 is a Monday, 364 days away
    let upcoming = book.upcoming_birthdays(365, today);
    assert_eq!(summary(&upcoming), vec!["Yesterday: 01.06.2026"]);
}

#[test]
fn test_window_across_new_year() {
    let book = book(vec![contact("January", Some("02.01.1990"))]);

    let upcoming = book.upcoming_birthdays(7, date(29, 12, 2025));

    assert_eq!(summary(&upcoming), vec!["January: 02.01.2026"]);
}

#[test]
fn test_results_sorted_by_congratulation_date() {
    let book = book(vec![
        contact("Ann", Some("03.01.1990")),
        contact("Ben", Some("01.01.1985")),
    ]);

    let upcoming = book.upcoming_birthdays(7, date(30, 12, 2024));

    assert_eq!(
        summary(&upcoming),
        vec!["Ben: 01.01.2025", "Ann: 03.01.2025"]
    );
}

#[test]
fn test_same_date_sorted_by_name() {
    let book = book(vec![
        contact("Zoe", Some("09.06.1990")),
        contact("Adam", Some("07.06.1991")),
        contact("Mia", Some("08.06.1992")),
    ]);

    let upcoming = book.upcoming_birthdays(7, date(2, 6, 2025));

    assert_eq!(
        summary(&upcoming),
        vec!["Adam: 09.06.2025", "Mia: 09.06.2025", "Zoe: 09.06.2025"]
    );
}

#[test]
fn test_contacts_without_birthday_are_skipped() {
    let book = book(vec![
        contact("NoBirthday", None),
        contact("Birthday", Some("04.06.1999")),
    ]);

    let upcoming = book.upcoming_birthdays(7, date(2, 6, 2025));

    assert_eq!(summary(&upcoming), vec!["Birthday: 04.06.2025"]);
}

#[test]
fn test_negative_window_yields_nothing() {
    let book = book(vec![contact("Today", Some("04.06.1999"))]);

    assert!(book.upcoming_birthdays(-1, date(4, 6, 2025)).is_empty());
}

#[test]
fn test_empty_book_yields_nothing() {
    assert!(AddressBook::new()
        .upcoming_birthdays(7, date(4, 6, 2025))
        .is_empty());
}
