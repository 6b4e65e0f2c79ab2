use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Prompt;
use crate::session::{SaveOutcome, Session};
use crate::store::DataStore;

pub fn hello<S: DataStore, P: Prompt>(_session: &mut Session<S, P>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
}

/// Offers to save, then ends the session whatever the answer.
pub fn exit<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let answer = session
        .prompt
        .ask("Would you like to save changes (Y/N)? ")?;

    let mut result = if answer.trim().eq_ignore_ascii_case("y") {
        save(session)?
    } else {
        CmdResult::default()
    };
    result.add_message(CmdMessage::info("Goodbye!"));
    Ok(result.with_exit())
}

pub fn save<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let message = match session.save()? {
        SaveOutcome::Saved => CmdMessage::success(format!(
            "Address Book successfully saved to {}",
            session.store.location()
        )),
        SaveOutcome::NothingToSave => {
            CmdMessage::warning("Address Book is empty, no data to be saved to file")
        }
    };
    Ok(CmdResult::default().with_message(message))
}

/// Says nothing when there is no usable backup.
pub fn load<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.load() {
        result.add_message(CmdMessage::success(format!(
            "Address Book successfully loaded from {}",
            session.store.location()
        )));
    }
    Ok(result)
}

pub fn help<S: DataStore, P: Prompt>(_session: &mut Session<S, P>) -> Result<CmdResult> {
    let listing = commands::table::<S, P>().help();
    Ok(CmdResult::default().with_message(CmdMessage::info(listing)))
}
