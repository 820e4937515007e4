//! Interactive command shell.
//!
//! Reads one command per line, runs it against the address book and writes
//! one reply. Failed commands produce a message and the session continues;
//! only storage and terminal I/O failures end it early.

pub mod command;
pub mod handlers;

pub use command::Command;

use crate::error::{BookResult, SessionError};
use crate::models::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Message(String),
    /// Print the text and end the session
    Exit(String),
}

/// Dispatches parsed commands to the address book.
pub struct Shell {
    book: AddressBook,
    default_window_days: i64,
    clock: Box<dyn Fn() -> NaiveDate>,
}

impl Shell {
    /// Create a shell over `book` using the local calendar date as "today".
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            default_window_days: DEFAULT_WINDOW_DAYS,
            clock: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Window used by `birthdays` when no day count is given.
    pub fn with_default_window(mut self, days: i64) -> Self {
        self.default_window_days = days;
        self
    }

    /// Replace the source of today's date.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle one input line. Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Command rejected");
                Some(Reply::Message(handlers::error_message(&e)))
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> BookResult<Reply> {
        debug!(?command, "Executing command");

        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => handlers::add_contact(&mut self.book, &name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => handlers::change_phone(&mut self.book, &name, &old_phone, &new_phone)?,
            Command::Phone { name } => handlers::show_phones(&self.book, &name)?,
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday { name, birthday } => {
                handlers::add_birthday(&mut self.book, &name, &birthday)?
            }
            Command::ShowBirthday { name } => handlers::show_birthday(&self.book, &name)?,
            Command::Birthdays { days } => {
                let window = days.unwrap_or(self.default_window_days);
                handlers::birthdays(&self.book, window, (self.clock)())
            }
            Command::RemovePhone { name, phone } => {
                handlers::remove_phone(&mut self.book, &name, &phone)?
            }
            Command::Delete { name } => handlers::delete_contact(&mut self.book, &name)?,
            Command::Exit => return Ok(Reply::Exit(FAREWELL.to_string())),
            Command::Unknown(keyword) => {
                warn!(%keyword, "Unknown command");
                "Invalid command.".to_string()
            }
        };

        Ok(Reply::Message(text))
    }
}

/// Run an interactive session.
///
/// Loads the book from `repo`, answers commands from `input` on `output`
/// until `close`/`exit` or end of input, then saves the book back.
pub fn run_session<R, W>(
    repo: &dyn BookRepository,
    default_window_days: i64,
    input: R,
    output: W,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    let book = repo.load()?;
    let shell = Shell::new(book).with_default_window(default_window_days);
    run_shell(shell, repo, input, output)
}

/// Drive an already constructed shell, saving its book to `repo` at the end.
pub fn run_shell<R, W>(
    mut shell: Shell,
    repo: &dyn BookRepository,
    mut input: R,
    mut output: W,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    info!(contacts = shell.book().len(), "Session started");
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        match shell.handle_line(&line) {
            None => continue,
            Some(Reply::Message(text)) => writeln!(output, "{}", text)?,
            Some(Reply::Exit(text)) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    repo.save(shell.book())?;
    info!(contacts = shell.book().len(), "Session finished");
    Ok(())
}
