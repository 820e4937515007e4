//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book operations.
///
/// Every variant is recoverable: the shell turns each one into a reply and
/// keeps reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone, date or day count failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// A command was given fewer arguments than it needs
    #[error("Not enough arguments: {command} expects {expected}")]
    MissingArguments {
        command: &'static str,
        expected: usize,
    },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file is not valid JSON or holds invalid contact data
    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The storage file was written by an incompatible version
    #[error("Unsupported storage version: {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The storage file lists the same contact name more than once
    #[error("Duplicate contact in storage: {0}")]
    DuplicateContact(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The address book could not be loaded or saved
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The terminal could not be read from or written to
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
