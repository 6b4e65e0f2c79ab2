//! # Directory
//!
//! The in-memory store for a session: contact [`Record`]s keyed by name and
//! [`Notice`]s keyed by hashtag. Both maps keep insertion order so listings come out
//! the way entries were added.
//!
//! Every key equals the name (or hashtag) of the entity it maps to. Operations that
//! could break that, like renaming a contact, re-key the entry in the same call.
//! Every fallible operation validates before it touches anything, so an `Err` always
//! means the directory is unchanged.
//!
//! On disk the directory is a pair of lists; keys are rebuilt from the entities on
//! load, so a backup file cannot smuggle in a mismatched key.

use crate::error::{ButlerError, Result};
use crate::fields::{Address, Birthday, Email, Hashtag, Note, Phone, ValidationError};
use crate::model::{Notice, Record};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single edit applied by [`Directory::modify_field`]. Values are raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Address(String),
    /// `index` is 1-based. `phones.len() + 1` appends a new number.
    Phone { index: usize, value: String },
    Email(String),
    Birthday(String),
}

/// A field cleared by [`Directory::remove_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRemoval {
    /// 1-based index of the phone to drop; `0` drops every phone.
    Phone(usize),
    Email,
    Address,
    Birthday,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Snapshot", into = "Snapshot")]
pub struct Directory {
    records: IndexMap<String, Record>,
    notices: IndexMap<String, Notice>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    records: Vec<Record>,
    #[serde(default)]
    notices: Vec<Notice>,
}

impl From<Snapshot> for Directory {
    fn from(snapshot: Snapshot) -> Self {
        let mut directory = Directory::new();
        for record in snapshot.records {
            directory.add_record(record);
        }
        for notice in snapshot.notices {
            directory
                .notices
                .insert(notice.hashtag.as_str().to_string(), notice);
        }
        directory
    }
}

impl From<Directory> for Snapshot {
    fn from(directory: Directory) -> Self {
        Self {
            records: directory.records.into_values().collect(),
            notices: directory.notices.into_values().collect(),
        }
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.values()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.len()
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    // --- Records ---

    /// Inserts or overwrites by name. Callers wanting uniqueness check
    /// [`contains_record`](Self::contains_record) first.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn contains_record(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Case-insensitive exact name lookup.
    pub fn find_by_name(&self, name: &str) -> Result<&Record> {
        self.key_for(name)
            .and_then(|key| self.records.get(&key))
            .ok_or_else(|| contact_not_found(name))
    }

    /// Case-sensitive exact name lookup.
    pub fn find_by_name_exact(&self, name: &str) -> Result<&Record> {
        self.records
            .values()
            .find(|record| record.name == name)
            .ok_or_else(|| contact_not_found(name))
    }

    /// Records with `query` in any field, ignoring case, in directory order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .values()
            .filter(|record| record.matches(&query))
            .collect()
    }

    /// Applies `change` to the record whose name matches `name` ignoring case.
    pub fn modify_field(&mut self, name: &str, change: FieldChange) -> Result<&Record> {
        let key = self.key_for(name).ok_or_else(|| contact_not_found(name))?;

        let key = match change {
            FieldChange::Name(new_name) => self.rename(&key, new_name)?,
            FieldChange::Address(value) => {
                self.record_mut(&key)?.address = Some(Address::new(value));
                key
            }
            FieldChange::Phone { index, value } => {
                let record = self.record_mut(&key)?;
                let count = record.phones.len();
                if index == 0 || index > count + 1 {
                    return Err(ButlerError::InvalidSelection(format!(
                        "phone {} (choose 1-{})",
                        index,
                        count + 1
                    )));
                }
                let phone = Phone::parse(&value)?;
                if index == count + 1 {
                    record.phones.push(phone);
                } else {
                    record.phones[index - 1] = phone;
                }
                key
            }
            FieldChange::Email(value) => {
                let email = Email::parse(&value)?;
                self.record_mut(&key)?.email = Some(email);
                key
            }
            FieldChange::Birthday(value) => {
                let birthday = Birthday::parse(&value)?;
                self.record_mut(&key)?.birthday = Some(birthday);
                key
            }
        };

        self.records
            .get(&key)
            .ok_or_else(|| contact_not_found(&key))
    }

    /// Removes the record named exactly `name`.
    pub fn remove_record(&mut self, name: &str) -> Result<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| contact_not_found(name))
    }

    /// Clears one field of the record named exactly `name`.
    pub fn remove_field(&mut self, name: &str, field: FieldRemoval) -> Result<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| contact_not_found(name))?;

        match field {
            FieldRemoval::Phone(0) => record.phones.clear(),
            FieldRemoval::Phone(index) if index <= record.phones.len() => {
                record.phones.remove(index - 1);
            }
            FieldRemoval::Phone(index) => {
                return Err(ButlerError::InvalidSelection(format!(
                    "phone {} (choose 0-{})",
                    index,
                    record.phones.len()
                )));
            }
            FieldRemoval::Email => record.email = None,
            FieldRemoval::Address => record.address = None,
            FieldRemoval::Birthday => record.birthday = None,
        }
        Ok(())
    }

    /// Records whose next birthday falls within `within_days` of `today`, boundary included.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<&Record> {
        if within_days < 0 {
            return Vec::new();
        }
        self.records
            .values()
            .filter(|record| {
                record
                    .birthday
                    .and_then(|b| next_occurrence(b.date(), today))
                    .is_some_and(|next| (next - today).num_days() <= within_days)
            })
            .collect()
    }

    fn key_for(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        self.records
            .values()
            .find(|record| record.name.to_lowercase() == wanted)
            .map(|record| record.name.clone())
    }

    fn record_mut(&mut self, key: &str) -> Result<&mut Record> {
        self.records
            .get_mut(key)
            .ok_or_else(|| contact_not_found(key))
    }

    /// Re-keys `old` under `new_name`, keeping its position.
    fn rename(&mut self, old: &str, new_name: String) -> Result<String> {
        let new_name = new_name.trim().to_string();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if new_name == old {
            return Ok(new_name);
        }
        if self.records.contains_key(&new_name) {
            return Err(ButlerError::DuplicateKey(new_name));
        }

        let (index, _, mut record) = self
            .records
            .shift_remove_full(old)
            .ok_or_else(|| contact_not_found(old))?;
        record.name = new_name.clone();
        self.records.shift_insert(index, new_name.clone(), record);
        Ok(new_name)
    }

    // --- Notices ---

    pub fn notice(&self, hashtag: &str) -> Option<&Notice> {
        self.notices.get(hashtag)
    }

    /// Creates a notice, rejecting hashtags already in use. A blank first note is skipped.
    pub fn add_notice(&mut self, hashtag: Hashtag, first_note: Option<Note>) -> Result<&Notice> {
        let key = hashtag.as_str().to_string();
        if self.notices.contains_key(&key) {
            return Err(ButlerError::DuplicateTag(key));
        }

        let mut notice = Notice::new(hashtag);
        if let Some(note) = first_note.filter(|n| !n.as_str().trim().is_empty()) {
            notice.add_note(note);
        }
        let (index, _) = self.notices.insert_full(key, notice);
        Ok(&self.notices[index])
    }

    pub fn append_note(&mut self, hashtag: &str, note: Note) -> Result<&Notice> {
        let notice = self
            .notices
            .get_mut(hashtag)
            .ok_or_else(|| ButlerError::NotFound(format!("Hashtag {}", hashtag)))?;
        notice.add_note(note);
        Ok(&*notice)
    }

    /// Notes containing `keyword`, ignoring case; notice order, then note order.
    pub fn search_notes(&self, keyword: &str) -> Vec<&Note> {
        let keyword = keyword.to_lowercase();
        self.notices
            .values()
            .flat_map(|notice| notice.notes.iter())
            .filter(|note| note.as_str().to_lowercase().contains(&keyword))
            .collect()
    }

    pub fn search_notices_by_hashtag(&self, keyword: &str) -> Vec<&Notice> {
        let keyword = keyword.to_lowercase();
        self.notices
            .values()
            .filter(|notice| notice.hashtag.as_str().to_lowercase().contains(&keyword))
            .collect()
    }

    /// Notices ordered by hashtag text; equal tags keep directory order.
    pub fn sorted_notices(&self) -> Vec<&Notice> {
        let mut sorted: Vec<&Notice> = self.notices.values().collect();
        sorted.sort_by(|a, b| a.hashtag.as_str().cmp(b.hashtag.as_str()));
        sorted
    }
}

fn contact_not_found(name: &str) -> ButlerError {
    ButlerError::NotFound(format!("Contact \"{}\"", name))
}

/// Next time `birthday`'s month and day come round, on or after `today`.
/// Feb 29 birthdays are celebrated on Feb 28 in common years.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birthday, today.year() + 1)
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthday(raw: &str) -> Birthday {
        Birthday::parse_on(raw, date(2024, 6, 15)).unwrap()
    }

    fn alice() -> Record {
        Record::new("Alice")
            .unwrap()
            .with_address(Address::new("Kyiv, Main St 1"))
            .with_phone(Phone::parse("+38(099)1234567").unwrap())
            .with_email(Email::parse("alice@mail.com").unwrap())
            .with_birthday(birthday("1990.03.25"))
    }

    fn directory_with(names: &[&str]) -> Directory {
        let mut dir = Directory::new();
        for name in names {
            dir.add_record(Record::new(*name).unwrap());
        }
        dir
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn add_record_overwrites_same_name() {
        let mut dir = Directory::new();
        assert!(dir.add_record(alice()).is_none());
        let previous = dir.add_record(Record::new("Alice").unwrap());
        assert_eq!(previous, Some(alice()));
        assert_eq!(dir.record_count(), 1);
        assert!(dir.get("Alice").unwrap().phones.is_empty());
    }

    #[test]
    fn search_matches_substring_of_every_field() {
        let mut dir = directory_with(&["Bob"]);
        dir.add_record(alice());

        for query in ["lic", "MAIN st", "@mail", "1990-03-25", "03-2", "099)123"] {
            assert_eq!(names(&dir.search(query)), vec!["Alice"], "query {query}");
        }
        assert_eq!(names(&dir.search("o")), vec!["Bob", "Alice"]);
        assert!(dir.search("nobody").is_empty());
    }

    #[test]
    fn find_by_name_ignores_case_but_exact_lookup_does_not() {
        let mut dir = Directory::new();
        dir.add_record(alice());

        assert_eq!(dir.find_by_name("aLiCe").unwrap().name, "Alice");
        assert!(dir.find_by_name_exact("Alice").is_ok());
        assert!(matches!(
            dir.find_by_name_exact("alice"),
            Err(ButlerError::NotFound(_))
        ));
    }

    #[test]
    fn lookup_scans_past_the_first_entry() {
        let dir = directory_with(&["Ann", "Ben", "Cid"]);
        assert_eq!(dir.find_by_name_exact("Cid").unwrap().name, "Cid");

        let mut dir = dir;
        assert_eq!(dir.remove_record("Cid").unwrap().name, "Cid");
        assert_eq!(dir.record_count(), 2);
    }

    #[test]
    fn renaming_rekeys_and_keeps_other_fields() {
        let mut dir = directory_with(&["Bob"]);
        dir.add_record(alice());
        dir.add_record(Record::new("Carol").unwrap());

        let renamed = dir
            .modify_field("alice", FieldChange::Name("Alicia".into()))
            .unwrap()
            .clone();

        assert!(matches!(dir.find_by_name("Alice"), Err(ButlerError::NotFound(_))));
        let found = dir.find_by_name("Alicia").unwrap();
        assert_eq!(found, &renamed);
        assert_eq!(found.phones, alice().phones);
        assert_eq!(found.email, alice().email);
        assert_eq!(found.birthday, alice().birthday);
        assert_eq!(
            dir.records().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["Bob", "Alicia", "Carol"]
        );
    }

    #[test]
    fn renaming_trims_the_new_name() {
        let mut dir = directory_with(&["Alice", "Bob"]);

        dir.modify_field("Alice", FieldChange::Name("  Alicia ".into()))
            .unwrap();
        assert_eq!(dir.find_by_name("Alicia").unwrap().name, "Alicia");
        assert!(dir.contains_record("Alicia"));

        let err = dir
            .modify_field("Alicia", FieldChange::Name("Bob ".into()))
            .unwrap_err();
        assert!(matches!(err, ButlerError::DuplicateKey(name) if name == "Bob"));

        assert_eq!(
            dir.modify_field("alicia", FieldChange::Name("Alicia\t".into()))
                .unwrap()
                .name,
            "Alicia"
        );
    }

    #[test]
    fn renaming_onto_existing_name_is_rejected() {
        let mut dir = directory_with(&["Alice", "Bob"]);
        let before = dir.clone();

        let err = dir
            .modify_field("Alice", FieldChange::Name("Bob".into()))
            .unwrap_err();
        assert!(matches!(err, ButlerError::DuplicateKey(name) if name == "Bob"));
        assert_eq!(dir, before);

        let err = dir
            .modify_field("Alice", FieldChange::Name("".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ButlerError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn phone_edits_replace_append_or_reject() {
        let mut dir = Directory::new();
        dir.add_record(alice());

        dir.modify_field(
            "Alice",
            FieldChange::Phone {
                index: 1,
                value: "+38(050)7654321".into(),
            },
        )
        .unwrap();
        dir.modify_field(
            "Alice",
            FieldChange::Phone {
                index: 2,
                value: "+38(063)1112233".into(),
            },
        )
        .unwrap();
        let phones: Vec<_> = dir.get("Alice").unwrap().phones.iter().map(|p| p.to_string()).collect();
        assert_eq!(phones, vec!["+38(050)7654321", "+38(063)1112233"]);

        let before = dir.clone();
        for index in [0, 4] {
            let err = dir
                .modify_field(
                    "Alice",
                    FieldChange::Phone {
                        index,
                        value: "+38(063)1112233".into(),
                    },
                )
                .unwrap_err();
            assert!(matches!(err, ButlerError::InvalidSelection(_)));
        }
        let err = dir
            .modify_field(
                "Alice",
                FieldChange::Phone {
                    index: 1,
                    value: "12345".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ButlerError::Validation(ValidationError::Phone(_))));
        assert_eq!(dir, before);
    }

    #[test]
    fn invalid_email_or_birthday_leaves_field_unchanged() {
        let mut dir = Directory::new();
        dir.add_record(alice());

        assert!(dir
            .modify_field("Alice", FieldChange::Email("not-an-email".into()))
            .is_err());
        assert!(dir
            .modify_field("Alice", FieldChange::Birthday("3000.01.01".into()))
            .is_err());
        assert_eq!(dir.get("Alice"), Some(&alice()));

        dir.modify_field("Alice", FieldChange::Email("alice@work.org".into()))
            .unwrap();
        dir.modify_field("Alice", FieldChange::Address("Lviv".into()))
            .unwrap();
        let record = dir.get("Alice").unwrap();
        assert_eq!(record.email.as_ref().unwrap().as_str(), "alice@work.org");
        assert_eq!(record.address.as_ref().unwrap().as_str(), "Lviv");
    }

    #[test]
    fn modify_unknown_contact_is_not_found() {
        let mut dir = Directory::new();
        let err = dir
            .modify_field("Ghost", FieldChange::Address("x".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Contact \"Ghost\" not found");
    }

    #[test]
    fn removes_single_phone_all_phones_or_rejects_index() {
        let mut dir = Directory::new();
        dir.add_record(
            alice()
                .with_phone(Phone::parse("+38(050)7654321").unwrap())
                .with_phone(Phone::parse("+38(063)1112233").unwrap()),
        );

        dir.remove_field("Alice", FieldRemoval::Phone(2)).unwrap();
        let phones: Vec<_> = dir.get("Alice").unwrap().phones.iter().map(|p| p.to_string()).collect();
        assert_eq!(phones, vec!["+38(099)1234567", "+38(063)1112233"]);

        let err = dir.remove_field("Alice", FieldRemoval::Phone(3)).unwrap_err();
        assert!(matches!(err, ButlerError::InvalidSelection(_)));
        assert_eq!(dir.get("Alice").unwrap().phones.len(), 2);

        dir.remove_field("Alice", FieldRemoval::Phone(0)).unwrap();
        assert!(dir.get("Alice").unwrap().phones.is_empty());
    }

    #[test]
    fn removes_optional_fields_and_whole_records() {
        let mut dir = Directory::new();
        dir.add_record(alice());

        dir.remove_field("Alice", FieldRemoval::Email).unwrap();
        dir.remove_field("Alice", FieldRemoval::Address).unwrap();
        dir.remove_field("Alice", FieldRemoval::Birthday).unwrap();
        let record = dir.get("Alice").unwrap();
        assert!(record.email.is_none() && record.address.is_none() && record.birthday.is_none());

        dir.remove_record("Alice").unwrap();
        assert!(!dir.has_records());
        assert!(matches!(dir.remove_record("Alice"), Err(ButlerError::NotFound(_))));
    }

    #[test]
    fn upcoming_birthdays_include_boundary_and_wrap_year() {
        let today = date(2024, 12, 30);
        let mut dir = Directory::new();
        dir.add_record(Record::new("Today").unwrap().with_birthday(birthday("1990.12.30")));
        dir.add_record(Record::new("Soon").unwrap().with_birthday(birthday("1985.01.02")));
        dir.add_record(Record::new("Past").unwrap().with_birthday(birthday("1985.12.29")));
        dir.add_record(Record::new("NoDate").unwrap());

        assert_eq!(names(&dir.upcoming_birthdays(0, today)), vec!["Today"]);
        assert_eq!(names(&dir.upcoming_birthdays(3, today)), vec!["Today", "Soon"]);
        assert_eq!(names(&dir.upcoming_birthdays(2, today)), vec!["Today"]);
        assert_eq!(dir.upcoming_birthdays(364, today).len(), 3);
        assert!(dir.upcoming_birthdays(-1, today).is_empty());
    }

    #[test]
    fn leap_day_birthdays_fall_on_feb_28_in_common_years() {
        let mut dir = Directory::new();
        dir.add_record(Record::new("Leap").unwrap().with_birthday(birthday("2000.02.29")));

        assert_eq!(dir.upcoming_birthdays(0, date(2025, 2, 28)).len(), 1);
        assert_eq!(dir.upcoming_birthdays(0, date(2024, 2, 29)).len(), 1);
        assert!(dir.upcoming_birthdays(0, date(2024, 2, 28)).is_empty());
    }

    #[test]
    fn duplicate_hashtag_is_rejected_and_original_kept() {
        let mut dir = Directory::new();
        dir.add_notice(Hashtag::new("#todo"), Some(Note::new("A"))).unwrap();

        let err = dir
            .add_notice(Hashtag::new("#todo"), Some(Note::new("B")))
            .unwrap_err();
        assert!(matches!(err, ButlerError::DuplicateTag(tag) if tag == "#todo"));

        let found = dir.search_notices_by_hashtag("todo");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].notes, vec![Note::new("A")]);
    }

    #[test]
    fn blank_hashtag_and_blank_note() {
        let mut dir = Directory::new();
        let notice = dir.add_notice(Hashtag::new(""), Some(Note::new(" "))).unwrap();
        assert_eq!(notice.hashtag.as_str(), "#None");
        assert!(notice.notes.is_empty());

        assert!(matches!(
            dir.add_notice(Hashtag::new("  "), None),
            Err(ButlerError::DuplicateTag(_))
        ));
    }

    #[test]
    fn append_note_requires_existing_notice() {
        let mut dir = Directory::new();
        dir.add_notice(Hashtag::new("#work"), None).unwrap();
        dir.append_note("#work", Note::new("ship it")).unwrap();
        dir.append_note("#work", Note::new("ship it")).unwrap();
        assert_eq!(dir.notice("#work").unwrap().notes.len(), 2);

        assert!(matches!(
            dir.append_note("#home", Note::new("x")),
            Err(ButlerError::NotFound(_))
        ));
    }

    #[test]
    fn note_search_follows_notice_then_note_order() {
        let mut dir = Directory::new();
        dir.add_notice(Hashtag::new("#b"), Some(Note::new("Buy milk"))).unwrap();
        dir.append_note("#b", Note::new("walk dog")).unwrap();
        dir.append_note("#b", Note::new("MILK again")).unwrap();
        dir.add_notice(Hashtag::new("#a"), Some(Note::new("milkshake"))).unwrap();

        let found: Vec<_> = dir.search_notes("milk").iter().map(|n| n.to_string()).collect();
        assert_eq!(found, vec!["Buy milk", "MILK again", "milkshake"]);
        assert!(dir.search_notes("cat").is_empty());
    }

    #[test]
    fn sorts_notices_by_hashtag() {
        let mut dir = Directory::new();
        for tag in ["#b", "#a", "#c"] {
            dir.add_notice(Hashtag::new(tag), None).unwrap();
        }
        let sorted: Vec<_> = dir
            .sorted_notices()
            .iter()
            .map(|n| n.hashtag.to_string())
            .collect();
        assert_eq!(sorted, vec!["#a", "#b", "#c"]);
        // directory order untouched
        assert_eq!(dir.notices().next().unwrap().hashtag.as_str(), "#b");
    }

    #[test]
    fn clone_is_independent() {
        let mut dir = Directory::new();
        dir.add_record(alice());
        dir.add_notice(Hashtag::new("#todo"), Some(Note::new("A"))).unwrap();

        let copy = dir.clone();
        dir.remove_field("Alice", FieldRemoval::Phone(0)).unwrap();
        dir.append_note("#todo", Note::new("B")).unwrap();

        assert_eq!(copy.get("Alice").unwrap().phones.len(), 1);
        assert_eq!(copy.notice("#todo").unwrap().notes.len(), 1);
    }

    #[test]
    fn serializes_as_lists_and_rebuilds_keys() {
        let mut dir = directory_with(&["Bob"]);
        dir.add_record(alice());
        dir.add_notice(Hashtag::new("#todo"), Some(Note::new("A"))).unwrap();

        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["records"][1]["name"], "Alice");
        assert_eq!(json["records"][1]["birthday"], "1990-03-25");
        assert_eq!(json["notices"][0]["hashtag"], "#todo");

        let back: Directory = serde_json::from_value(json).unwrap();
        assert_eq!(back, dir);
    }
}
