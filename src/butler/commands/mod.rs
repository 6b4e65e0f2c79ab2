//! # Command Layer
//!
//! One handler per entry of the command table. A handler receives the [`Session`],
//! asks whatever it needs through the session's [`Prompt`], works on the
//! [`Directory`](crate::directory::Directory) and returns a [`CmdResult`] with
//! leveled messages for the UI to print.
//!
//! Domain failures are returned as `Err` and turned into error messages by
//! [`Session::execute`]; handlers only build warnings themselves for outcomes that are
//! not failures, like an empty search.

use crate::dispatch::Dispatcher;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::store::DataStore;

pub mod contacts;
pub mod files;
pub mod general;
pub mod helpers;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`/`close`: the UI should end the session after printing.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents joined by newlines.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The full command table, in the order `help` lists it.
pub fn table<S: DataStore, P: Prompt>() -> Dispatcher<Session<S, P>> {
    Dispatcher::new()
        .register("hello", "just greeting", general::hello)
        .register("exit", "exit from the bot with or without saving", general::exit)
        .register("close", "exit from the bot with or without saving", general::exit)
        .register("save", "saves to file all changes", general::save)
        .register("load", "loads last version of the Address Book", general::load)
        .register("help", "shows the list of all supported commands", general::help)
        .register("add contact", "adds new contact", contacts::add)
        .register("+c", "adds new contact (short command)", contacts::add)
        .register("show contacts", "shows all contacts", contacts::show)
        .register("?c", "shows all contacts (short command)", contacts::show)
        .register("search", "search for a contact by any field", contacts::search)
        .register("modify", "modify an existing contact", contacts::modify)
        .register("remove", "remove a contact or one of its fields", contacts::remove)
        .register("to birthdays", "contacts with birthdays in the next N days", contacts::birthdays)
        .register("add note", "adds note with or without hashtag", notes::add)
        .register("+n", "adds note with or without hashtag (short command)", notes::add)
        .register("append note", "adds a note to an existing hashtag", notes::append)
        .register("show notes", "shows all notes", notes::show)
        .register("?n", "shows all notes (short command)", notes::show)
        .register("search notes", "searches for notes containing a keyword", notes::search)
        .register("?s", "searches for notes containing a keyword (short command)", notes::search)
        .register("search hashtag", "search notes by hashtag", notes::search_hashtag)
        .register("?h", "search notes by hashtag (short command)", notes::search_hashtag)
        .register("sort notes", "sort notes by hashtag", notes::sort)
        .register("so", "sort notes by hashtag (short command)", notes::sort)
        .register("sort files", "sorts files of a folder into categories", files::sort)
}
