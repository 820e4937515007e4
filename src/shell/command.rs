//! Parsing of input lines into shell commands.

use crate::domain::ValidationError;
use crate::error::{BookError, BookResult};

/// A parsed shell command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    /// `None` means the configured default window
    Birthdays {
        days: Option<i64>,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated token, lower-cased, selects the
    /// command. Surplus arguments are ignored. Returns `Ok(None)` for a
    /// blank line.
    ///
    /// # Errors
    ///
    /// `BookError::MissingArguments` when a command gets too few arguments,
    /// and `ValidationError::InvalidDayCount` when `birthdays` is given a
    /// non-integer window.
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let keyword = keyword.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = require::<2>("add", &args)?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = require::<3>("change", &args)?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = require::<1>("phone", &args)?;
                Self::Phone { name }
            }
            "all" => Self::All,
            "add_birthday" => {
                let [name, birthday] = require::<2>("add_birthday", &args)?;
                Self::AddBirthday { name, birthday }
            }
            "show_birthday" => {
                let [name] = require::<1>("show_birthday", &args)?;
                Self::ShowBirthday { name }
            }
            "birthdays" => Self::Birthdays {
                days: args.first().map(|raw| parse_days(raw)).transpose()?,
            },
            "remove_phone" => {
                let [name, phone] = require::<2>("remove_phone", &args)?;
                Self::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = require::<1>("delete", &args)?;
                Self::Delete { name }
            }
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(keyword),
        };

        Ok(Some(command))
    }
}

/// The first `N` arguments as owned strings.
fn require<const N: usize>(command: &'static str, args: &[&str]) -> BookResult<[String; N]> {
    if args.len() < N {
        return Err(BookError::MissingArguments {
            command,
            expected: N,
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

fn parse_days(raw: &str) -> BookResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidDayCount(raw.to_string()).into())
}
