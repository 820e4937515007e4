//! Contact Book - a personal contact manager with birthday reminders.
//!
//! This library stores named contacts with validated phone numbers and an
//! optional birthday, and reports whose birthday is coming up within a
//! look-ahead window, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Contact records and the address book, including the birthday query
//! - **repositories**: Loading and saving the whole address book
//! - **shell**: Line-oriented command parsing and dispatch
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod shell;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use shell::{run_session, Command, Reply, Shell};
