//! Field values held by contacts and notices.
//!
//! Every value is a thin wrapper around text (or a date, for [`Birthday`]). The
//! constrained ones ([`Phone`], [`Email`], [`Birthday`]) can only be built through
//! their `parse` constructors, so a value that exists has already passed validation.
//! Invalid input comes back as a [`ValidationError`] and nothing is constructed.
//!
//! Accepted formats:
//! - Phone: `+CC(AAA)NNNNNNN`, e.g. `+38(099)1234567`
//! - Email: `name@domain.tld`, the local part starting with a letter, a 2-3 letter suffix
//! - Birthday: `YYYY.MM.DD` (or `YYYY-MM-DD`), in the past and less than 100 years ago

use chrono::{Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{2}\([0-9]{3}\)[0-9]{7}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][\w.]+@[a-zA-Z]+\.[a-zA-Z]{2,3}$").expect("valid email regex")
});

const DATE_FORMATS: [&str; 2] = ["%Y.%m.%d", "%Y-%m-%d"];
const MAX_AGE_MONTHS: u32 = 100 * 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Wrong phone format: \"{0}\" (ex. +38(099)1234567)")]
    Phone(String),

    #[error("Wrong email format: \"{0}\"")]
    Email(String),

    #[error("Wrong date format: \"{0}\" (ex. 2023.12.25)")]
    BirthdayFormat(String),

    #[error("Birthday {0} must be in the past and less than 100 years ago")]
    BirthdayRange(NaiveDate),

    #[error("Contact name cannot be empty")]
    EmptyName,
}

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// Checks a birthday against the current local date.
pub fn is_valid_birthday(raw: &str) -> bool {
    Birthday::parse(raw).is_ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if is_valid_phone(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::Phone(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if is_valid_email(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::Email(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_on(raw, Local::now().date_naive())
    }

    /// Parses and validates relative to `today`: the date must lie strictly between
    /// `today` and the same day 100 years earlier.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let date = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .ok_or_else(|| ValidationError::BirthdayFormat(raw.to_string()))?;

        let oldest = today
            .checked_sub_months(Months::new(MAX_AGE_MONTHS))
            .unwrap_or(NaiveDate::MIN);
        if date >= today || date <= oldest {
            return Err(ValidationError::BirthdayRange(date));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label grouping a set of notes. Blank labels become [`Hashtag::UNTAGGED`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hashtag(String);

impl Hashtag {
    pub const UNTAGGED: &'static str = "#None";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self(Self::UNTAGGED.to_string())
        } else {
            Self(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Note {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
