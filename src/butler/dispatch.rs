//! # Command Dispatcher
//!
//! Maps typed phrases to handlers. A handler takes nothing but the context it is bound
//! to (the [`Session`](crate::session::Session) in the real table) and returns a
//! [`CmdResult`].
//!
//! Phrases are matched exactly after trimming and lower-casing. When nothing matches,
//! the dispatcher tries to guess what was meant:
//!
//! 1. **Token containment**: any space-separated token longer than two characters that
//!    appears inside a command phrase suggests that phrase.
//! 2. **Windowed similarity**: for phrases at least as long as the input, a window the
//!    length of the input slides across the phrase one character at a time; a window
//!    whose [similarity ratio](crate::similarity::ratio) against the input exceeds
//!    [`SIMILARITY_THRESHOLD`] suggests the phrase.
//!
//! Inputs shorter than [`MIN_SUGGEST_LEN`] characters get no suggestions at all.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::similarity::ratio;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

pub const MIN_SUGGEST_LEN: usize = 4;
pub const SIMILARITY_THRESHOLD: f64 = 0.6;
const MIN_TOKEN_LEN: usize = 3;
const HELP_COLUMN_WIDTH: usize = 13;

pub type Handler<C> = fn(&mut C) -> Result<CmdResult>;

pub struct CommandEntry<C> {
    pub phrase: &'static str,
    pub description: &'static str,
    handler: Handler<C>,
}

impl<C> CommandEntry<C> {
    pub fn run(&self, ctx: &mut C) -> Result<CmdResult> {
        (self.handler)(ctx)
    }
}

pub struct Dispatcher<C> {
    entries: Vec<CommandEntry<C>>,
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> Dispatcher<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command. Phrases are stored lower-case; registering a phrase twice
    /// replaces the earlier entry in place.
    pub fn register(
        mut self,
        phrase: &'static str,
        description: &'static str,
        handler: Handler<C>,
    ) -> Self {
        debug_assert_eq!(phrase, phrase.to_lowercase(), "command phrases are lower-case");
        let entry = CommandEntry {
            phrase,
            description,
            handler,
        };
        match self.entries.iter_mut().find(|e| e.phrase == phrase) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry<C>> {
        self.entries.iter()
    }

    pub fn resolve(&self, phrase: &str) -> Option<&CommandEntry<C>> {
        let phrase = normalize(phrase);
        self.entries.iter().find(|entry| entry.phrase == phrase)
    }

    /// Runs the handler bound to `phrase`, or reports it as unknown with suggestions.
    pub fn dispatch(&self, ctx: &mut C, phrase: &str) -> Result<CmdResult> {
        match self.resolve(phrase) {
            Some(entry) => {
                debug!(command = entry.phrase, "dispatching");
                entry.run(ctx)
            }
            None => {
                debug!(phrase, "unknown command");
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(self.unknown_command(phrase)));
                Ok(result)
            }
        }
    }

    /// Commands the user may have meant by `phrase`, in table order, each at most once.
    pub fn suggest(&self, phrase: &str) -> Vec<&CommandEntry<C>> {
        let phrase = normalize(phrase);
        if phrase.chars().count() < MIN_SUGGEST_LEN {
            return Vec::new();
        }

        let tokens: Vec<&str> = phrase
            .split(' ')
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .collect();

        self.entries
            .iter()
            .filter(|entry| {
                tokens.iter().any(|token| entry.phrase.contains(token))
                    || has_similar_window(&phrase, entry.phrase)
            })
            .collect()
    }

    pub fn unknown_command(&self, phrase: &str) -> String {
        let shown = phrase.trim();
        let suggestions = self.suggest(phrase);
        if suggestions.is_empty() {
            return format!("Unknown command \"{}\"", shown);
        }

        let mut message = format!("Unknown command \"{}\"\nPossible commands:", shown);
        for entry in suggestions {
            message.push_str(&format!("\n{} -> {}", entry.phrase, entry.description));
        }
        message
    }

    /// Every registered phrase with its description, one per line.
    pub fn help(&self) -> String {
        let mut output = String::from("List of all supported commands:\n");
        for entry in &self.entries {
            let padding = HELP_COLUMN_WIDTH.saturating_sub(entry.phrase.width());
            output.push_str(&format!(
                "\n{}{} {}",
                entry.phrase,
                " ".repeat(padding),
                entry.description
            ));
        }
        output
    }
}

fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

fn has_similar_window(phrase: &str, candidate: &str) -> bool {
    let phrase_len = phrase.chars().count();
    let candidate: Vec<char> = candidate.chars().collect();
    if candidate.len() < phrase_len {
        return false;
    }

    candidate.windows(phrase_len).any(|window| {
        let window: String = window.iter().collect();
        ratio(phrase, &window) > SIMILARITY_THRESHOLD
    })
}
