//! # Butler Architecture
//!
//! Butler is a console assistant that keeps an address book and a collection of tagged
//! notes, and can tidy a folder by sorting its files into categories. The library holds
//! all of it; the binary is a thin read loop that feeds typed phrases into a [`Session`]
//! and prints what comes back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, sets up logging, runs the read loop        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + Dispatcher (dispatch.rs)            │
//! │  - Resolves a phrase to a handler, suggests on a miss       │
//! │  - Turns recoverable errors into error messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Interactive flows, asking through the Prompt trait       │
//! │  - Return CmdResult with leveled messages                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (directory.rs, model.rs, fields.rs)                 │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Terminal in the Core
//!
//! Nothing below the CLI layer writes to stdout or reads stdin. Handlers ask their
//! questions through [`prompt::Prompt`], so the same flows run against a terminal and
//! against a scripted prompt in tests.
//!
//! ## Testing
//!
//! Domain types and the directory carry most of the unit tests. Handlers are tested
//! with an [`InMemoryStore`](store::memory::InMemoryStore) and a scripted prompt; the
//! binary is driven end to end from `tests/`.
//!
//! ## Module Overview
//!
//! - [`fields`]: validated field values (phone, email, birthday, ...)
//! - [`model`]: `Record` and `Notice`
//! - [`directory`]: the two insertion-ordered maps and every query on them
//! - [`pages`]: restartable page-by-page listing
//! - [`similarity`]: the ratio behind command suggestions
//! - [`dispatch`]: the phrase table and fuzzy suggestions
//! - [`commands`]: the handlers and the command table
//! - [`session`]: ties directory, store, prompt and config together
//! - [`store`]: persistence
//! - [`sorter`]: sorting a folder's files into categories
//! - [`config`]: `butler.json`
//! - [`error`]: `ButlerError`

pub mod commands;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod model;
pub mod pages;
pub mod prompt;
pub mod session;
pub mod similarity;
pub mod sorter;
pub mod store;

pub use session::Session;
