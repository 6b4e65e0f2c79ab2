use crate::commands::helpers::{ask_index, ask_number, ask_optional, render_all, show_paged};
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::{FieldChange, FieldRemoval};
use crate::error::{ButlerError, Result};
use crate::fields::{Address, Birthday, Email, Phone};
use crate::model::Record;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::store::DataStore;
use chrono::Local;

const PHONE_QUESTION: &str = "Enter the new phone number (ex. +38(099)1234567): ";

pub fn add<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let Some(name) = ask_new_name(session)? else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Adding new contact was skipped")));
    };
    let prompt = &mut session.prompt;
    let mut record = Record::new(name)?;

    let address = prompt.ask("Enter address or press Enter to skip: ")?;
    if !address.trim().is_empty() {
        record = record.with_address(Address::new(address));
    }

    loop {
        let answer = prompt.ask("Enter phone (ex. +38(099)1234567) or press Enter to skip: ")?;
        if answer.trim().is_empty() {
            break;
        }
        match Phone::parse(&answer) {
            Ok(phone) => record.add_phone(phone),
            Err(e) => prompt.show(&e.to_string()),
        }
    }

    if let Some(email) = ask_optional(prompt, "Enter email or press Enter to skip: ", Email::parse)? {
        record = record.with_email(email);
    }
    if let Some(birthday) = ask_optional(
        prompt,
        "Enter birthday (ex. 2023.12.25) or press Enter to skip: ",
        Birthday::parse,
    )? {
        record = record.with_birthday(birthday);
    }

    let message = format!("Added contact\n{}", record.to_string().trim_end());
    session.directory.add_record(record);
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

/// Asks until the name is neither blank nor taken. `None` when the user gives up.
fn ask_new_name<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<Option<String>> {
    let mut name = session
        .prompt
        .ask("Enter contact name (obligatory field): ")?
        .trim()
        .to_string();

    loop {
        let retry = if name.is_empty() {
            "Contact name cannot be empty, enter contact name or press Enter to exit: ".to_string()
        } else if session.directory.contains_record(&name) {
            format!(
                "Contact \"{}\" already exists, enter new name or press Enter to exit: ",
                name
            )
        } else {
            return Ok(Some(name));
        };

        name = session.prompt.ask(&retry)?.trim().to_string();
        if name.is_empty() {
            return Ok(None);
        }
    }
}

pub fn show<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    if !session.directory.has_records() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No contacts, please add")));
    }
    let records: Vec<&Record> = session.directory.records().collect();
    show_paged(&mut session.prompt, &records, "contacts", "End of address book")
}

pub fn search<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let query = session.prompt.ask("Enter search query: ")?;
    let query = query.trim();
    let found = session.directory.search(query);

    let message = if found.is_empty() {
        CmdMessage::warning(format!("No contacts found for \"{}\"", query))
    } else {
        CmdMessage::info(format!("Contacts found:\n\n{}", render_all(&found).trim_end()))
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn modify<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let name = session.prompt.ask("Enter contact name: ")?;
    let record = session.directory.find_by_name(name.trim())?;
    let key = record.name.clone();
    let phones: Vec<String> = record.phones.iter().map(|p| p.to_string()).collect();
    session.prompt.show(&format!(
        "Current contact information:\n{}",
        record.to_string().trim_end()
    ));

    let field = session
        .prompt
        .ask("Enter the field you want to modify (name/address/phone/email/birthday): ")?;
    let (change, summary) = match field.trim().to_lowercase().as_str() {
        "name" => {
            let value = session.prompt.ask("Enter the new value: ")?.trim().to_string();
            (FieldChange::Name(value.clone()), format!("New name: \"{}\"", value))
        }
        "address" => {
            let value = session.prompt.ask("Enter the new value: ")?;
            (FieldChange::Address(value.clone()), format!("New address: \"{}\"", value))
        }
        "email" => {
            let value = session.prompt.ask("Enter the new value: ")?;
            (FieldChange::Email(value.clone()), format!("New email: \"{}\"", value))
        }
        "birthday" => {
            let value = session.prompt.ask("Enter the new value (ex. 2023.12.25): ")?;
            (FieldChange::Birthday(value.clone()), format!("New birthday: \"{}\"", value))
        }
        "phone" => ask_phone_change(&mut session.prompt, &phones)?,
        other => {
            return Err(ButlerError::InvalidSelection(format!("field \"{}\"", other)));
        }
    };

    session.directory.modify_field(&key, change)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact \"{}\" has been modified. {}",
        key, summary
    ))))
}

/// Picks a phone to replace, or the slot after the last one to add a number.
fn ask_phone_change<P: Prompt>(prompt: &mut P, phones: &[String]) -> Result<(FieldChange, String)> {
    let count = phones.len();

    let index = if count == 0 {
        let action = prompt.ask("Enter \"add\" to add a new phone number: ")?;
        if !action.trim().eq_ignore_ascii_case("add") {
            return Err(ButlerError::InvalidSelection(format!("action \"{}\"", action.trim())));
        }
        1
    } else {
        let listing: Vec<String> = phones
            .iter()
            .enumerate()
            .map(|(i, phone)| format!("{}. {}", i + 1, phone))
            .collect();
        prompt.show(&format!("Current phone numbers:\n{}", listing.join("\n")));

        let index = ask_index(
            prompt,
            &format!(
                "Select the phone number you want to modify or enter \"{}\" to add a new phone number: ",
                count + 1
            ),
        )?;
        if index == 0 || index > count + 1 {
            return Err(ButlerError::InvalidSelection(format!(
                "phone {} (choose 1-{})",
                index,
                count + 1
            )));
        }
        if index <= count {
            let action = prompt.ask("Enter \"replace\" to replace the phone number: ")?;
            if !action.trim().eq_ignore_ascii_case("replace") {
                return Err(ButlerError::InvalidSelection(format!(
                    "action \"{}\"",
                    action.trim()
                )));
            }
        }
        index
    };

    let value = prompt.ask(PHONE_QUESTION)?;
    let summary = if index > count {
        format!("New phone number added: {}", value)
    } else {
        format!("New phone number: {}", value)
    };
    Ok((FieldChange::Phone { index, value }, summary))
}

pub fn remove<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let name = session.prompt.ask("Enter contact name: ")?;
    let record = session.directory.find_by_name_exact(name.trim())?;
    let name = record.name.clone();
    let phones: Vec<String> = record
        .phones
        .iter()
        .enumerate()
        .map(|(i, phone)| format!("{}. {}", i + 1, phone))
        .collect();
    session.prompt.show(&format!("Contact found: {}", name));

    let choice = session.prompt.ask(
        "Enter the field to remove (1 - contact, 2 - number, 3 - email, 4 - address, 5 - birthday): ",
    )?;
    let message = match choice.trim() {
        "1" => {
            session.directory.remove_record(&name)?;
            format!("Contact \"{}\" has been removed", name)
        }
        "2" => {
            if phones.is_empty() {
                session.prompt.show("Phone numbers: none");
            } else {
                session
                    .prompt
                    .show(&format!("Phone numbers:\n{}", phones.join("\n")));
            }
            let index = ask_index(
                &mut session.prompt,
                "Enter the number of the phone to remove, or enter 0 to remove all phone numbers: ",
            )?;
            session
                .directory
                .remove_field(&name, FieldRemoval::Phone(index))?;
            if index == 0 {
                format!("All phone numbers removed from contact {}", name)
            } else {
                format!("Phone number {} removed from contact {}", index, name)
            }
        }
        "3" => {
            session.directory.remove_field(&name, FieldRemoval::Email)?;
            format!("Email removed from contact {}", name)
        }
        "4" => {
            session.directory.remove_field(&name, FieldRemoval::Address)?;
            format!("Address removed from contact {}", name)
        }
        "5" => {
            session.directory.remove_field(&name, FieldRemoval::Birthday)?;
            format!("Birthday removed from contact {}", name)
        }
        other => {
            return Err(ButlerError::InvalidSelection(format!("choice \"{}\"", other)));
        }
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

pub fn birthdays<S: DataStore, P: Prompt>(session: &mut Session<S, P>) -> Result<CmdResult> {
    let days = ask_number(&mut session.prompt, "Enter the number of days: ")?;
    let today = Local::now().date_naive();
    let upcoming = session.directory.upcoming_birthdays(days, today);

    let message = if upcoming.is_empty() {
        CmdMessage::info("No contacts with upcoming birthdays")
    } else {
        CmdMessage::info(format!(
            "Contacts with upcoming birthdays in the next {} days:\n\n{}",
            days,
            render_all(&upcoming).trim_end()
        ))
    };
    Ok(CmdResult::default().with_message(message))
}
