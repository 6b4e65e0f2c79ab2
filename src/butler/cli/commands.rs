//! # CLI Layer
//!
//! One possible front end for the butler library: a read loop over stdin.
//!
//! This is the only place that knows about stdin, stdout, stderr and exit codes.
//! It parses flags, sets up logging, builds the [`Session`] and then hands every
//! typed phrase to [`Session::execute`], printing the messages that come back.
//!
//! - `run()`: entry point called by `main.rs`
//! - `init_tracing()`: stderr logging, `warn` unless `-v` or `RUST_LOG` say otherwise
//! - `init_session()`: config, backup store and terminal prompt

use super::print::print_messages;
use super::setup::Cli;
use super::terminal::TerminalPrompt;
use butler::Session;
use butler::config::ButlerConfig;
use butler::error::{ButlerError, Result};
use butler::prompt::Prompt;
use butler::store::fs::FileStore;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const COMMAND_PROMPT: &str = "Please enter command or type \"help\": ";

type AppSession = Session<FileStore, TerminalPrompt>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut session = init_session(&cli)?;
    if session.config().load_on_start && !cli.no_load {
        let result = session.execute("load")?;
        print_messages(&result.messages);
    }

    loop {
        let phrase = match session.prompt_mut().ask(COMMAND_PROMPT) {
            Ok(phrase) => phrase,
            Err(ButlerError::InputClosed) => break,
            Err(e) => return Err(e),
        };
        if phrase.trim().is_empty() {
            continue;
        }

        match session.execute(&phrase) {
            Ok(result) => {
                print_messages(&result.messages);
                if result.exit {
                    return Ok(());
                }
            }
            Err(ButlerError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }

    debug!("input closed");
    println!();
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_session(cli: &Cli) -> Result<AppSession> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = ButlerConfig::load(&data_dir)?;
    let store = FileStore::new(config.backup_path(&data_dir));
    debug!(backup = %store.path().display(), "session ready");

    Ok(Session::new(store, TerminalPrompt::new(), config))
}
