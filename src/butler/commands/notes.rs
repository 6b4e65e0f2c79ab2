use crate::commands::helpers::{render_all, show_paged};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ButlerError, Result};
use crate::fields::{Hashtag, Note};
use crate::model::Notice;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::store::DataStore;

/// Creates a notice. A taken hashtag is rejected before the note is asked for.
pub fn add<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let raw = session
        .prompt
        .ask("Enter hashtag for your note (ex. #todo): ")?;
    let hashtag = Hashtag::new(raw.trim());
    if session.directory.notice(hashtag.as_str()).is_some() {
        return Err(ButlerError::DuplicateTag(hashtag.as_str().to_string()));
    }

    let note = session.prompt.ask("Enter note: ")?;
    let notice = session
        .directory
        .add_notice(hashtag, Some(Note::new(note)))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Added record with {}",
        notice.to_string().trim_end()
    ))))
}

pub fn append<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let raw = session.prompt.ask("Enter hashtag to add a note to: ")?;
    let hashtag = Hashtag::new(raw.trim());
    if session.directory.notice(hashtag.as_str()).is_none() {
        return Err(ButlerError::NotFound(format!("Hashtag {}", hashtag)));
    }

    let note = session.prompt.ask("Enter note: ")?;
    if note.trim().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Note cannot be empty.")));
    }
    let notice = session
        .directory
        .append_note(hashtag.as_str(), Note::new(note))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Updated record with {}",
        notice.to_string().trim_end()
    ))))
}

pub fn show<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    if session.directory.notice_count() == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No notes, please add")));
    }
    let notices: Vec<&Notice> = session.directory.notices().collect();
    show_paged(&mut session.prompt, &notices, "notes", "End of notes")
}

pub fn search<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let keyword = session.prompt.ask("Enter a keyword to search: ")?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Keyword cannot be empty.")));
    }

    let found = session.directory.search_notes(keyword);
    Ok(found_or_nothing(found.len(), render_all(&found)))
}

pub fn search_hashtag<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let keyword = session.prompt.ask("Enter a hashtag to search: ")?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Hashtag cannot be empty.")));
    }

    let found = session.directory.search_notices_by_hashtag(keyword);
    Ok(found_or_nothing(found.len(), render_all(&found)))
}

pub fn sort<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let sorted = session.directory.sorted_notices();
    let message = if sorted.is_empty() {
        CmdMessage::warning("No notes found.")
    } else {
        CmdMessage::info(format!("Sorted notes:\n\n{}", render_all(&sorted).trim_end()))
    };
    Ok(CmdResult::default().with_message(message))
}

fn found_or_nothing(count: usize, rendered: String) -> CmdResult {
    let message = if count == 0 {
        CmdMessage::warning("No notes found.")
    } else {
        CmdMessage::info(format!("Found {} notes:\n\n{}", count, rendered.trim_end()))
    };
    CmdResult::default().with_message(message)
}
