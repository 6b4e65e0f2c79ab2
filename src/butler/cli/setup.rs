use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "butler", bin_name = "butler", version)]
#[command(about = "Console assistant for contacts, tagged notes and tidy folders", long_about = None)]
pub struct Cli {
    /// Folder holding the backup file and butler.json (defaults to the current folder)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with an empty address book, even if a backup exists
    #[arg(long)]
    pub no_load: bool,
}
