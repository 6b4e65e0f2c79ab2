use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::sorter;
use crate::store::DataStore;
use std::path::Path;

pub fn sort<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let answer = session
        .prompt
        .ask("Enter the absolute path of the folder you want to sort: ")?;

    let mut ignored = session.config.ignored_files.clone();
    if !ignored.contains(&session.config.backup_file) {
        ignored.push(session.config.backup_file.clone());
    }

    let report = sorter::sort_directory(Path::new(answer.trim()), &ignored)?;
    if report.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No files found for sorting.")));
    }

    let mut result = CmdResult::default();
    for (category, files) in &report.moved {
        result.add_message(CmdMessage::info(format!("{}: {}", category, files.join(", "))));
    }
    result.add_message(CmdMessage::success("File sorting completed successfully."));
    Ok(result)
}
