use crate::fields::{Address, Birthday, Email, Hashtag, Note, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact. `name` doubles as the record's key in the [`Directory`](crate::directory::Directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub address: Option<Address>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    pub email: Option<Email>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            address: None,
            phones: Vec::new(),
            email: None,
            birthday: None,
        })
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Case-insensitive substring match over every field. `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(query);

        contains(&self.name)
            || self.address.as_ref().is_some_and(|a| contains(a.as_str()))
            || self.email.as_ref().is_some_and(|e| contains(e.as_str()))
            || self.birthday.is_some_and(|b| contains(&b.to_string()))
            || self.phones.iter().any(|p| contains(p.as_str()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        if let Some(address) = &self.address {
            writeln!(f, "Address: {}", address)?;
        }
        if !self.phones.is_empty() {
            writeln!(f, "Phone(s):")?;
            for phone in &self.phones {
                writeln!(f, "- {}", phone)?;
            }
        }
        if let Some(email) = &self.email {
            writeln!(f, "Email: {}", email)?;
        }
        if let Some(birthday) = &self.birthday {
            writeln!(f, "Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// A hashtag and the notes filed under it, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub hashtag: Hashtag,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Notice {
    pub fn new(hashtag: Hashtag) -> Self {
        Self {
            hashtag,
            notes: Vec::new(),
        }
    }

    pub fn add_note(&mut self, note: impl Into<Note>) {
        self.notes.push(note.into());
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hashtag: {}", self.hashtag)?;
        if self.notes.is_empty() {
            return writeln!(f, "Notes: none");
        }
        writeln!(f, "Notes:")?;
        for (i, note) in self.notes.iter().enumerate() {
            writeln!(f, " {}: {}", i + 1, note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Record {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Record::new("Alice")
            .unwrap()
            .with_address(Address::new("Kyiv, Main St 1"))
            .with_phone(Phone::parse("+38(099)1234567").unwrap())
            .with_email(Email::parse("alice@mail.com").unwrap())
            .with_birthday(Birthday::parse_on("1990.03.25", today).unwrap())
    }

    #[test]
    fn rejects_empty_names() {
        assert_eq!(Record::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn renders_only_present_fields() {
        let bare = Record::new("Bob").unwrap();
        assert_eq!(bare.to_string(), "Name: Bob\n");

        let rendered = sample().to_string();
        assert_eq!(
            rendered,
            "Name: Alice\nAddress: Kyiv, Main St 1\nPhone(s):\n- +38(099)1234567\n\
             Email: alice@mail.com\nBirthday: 1990-03-25\n"
        );
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let record = sample();
        for query in ["ali", "main st", "mail.com", "1990-03", "(099)", "kyiv"] {
            assert!(record.matches(query), "{query} should match");
        }
        assert!(!record.matches("bob"));
    }

    #[test]
    fn notice_lists_numbered_notes() {
        let mut notice = Notice::new(Hashtag::new("#todo"));
        assert_eq!(notice.to_string(), "Hashtag: #todo\nNotes: none\n");

        notice.add_note("buy milk");
        notice.add_note(Note::new("call mom"));
        assert_eq!(
            notice.to_string(),
            "Hashtag: #todo\nNotes:\n 1: buy milk\n 2: call mom\n"
        );
    }
}
