use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};
use crate::validation;

use super::field::{Birthday, Phone};

/// One contact: a name, an ordered list of phone numbers, and an
/// optional birthday. The name is fixed at construction; the book keys
/// records by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Birthday,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Birthday::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Appends a new phone entry. The entry is appended even when the
    /// input fails validation (it stays empty), so duplicates and blank
    /// slots are possible; the validation outcome is returned.
    pub fn add_phone(&mut self, input: &str) -> ContactResult<()> {
        let mut phone = Phone::new();
        let outcome = phone.set(input);
        self.phones.push(phone);
        outcome
    }

    /// Replaces the phone at `index` via a validated write. Out of
    /// range leaves the list untouched.
    pub fn edit_phone(&mut self, index: usize, input: &str) -> ContactResult<()> {
        match self.phones.get_mut(index) {
            Some(phone) => phone.set(input),
            None => Err(ContactError::PhoneIndexOutOfRange { index }),
        }
    }

    /// Removes the phone at `index`, shifting later entries left. Out
    /// of range leaves the list untouched.
    pub fn delete_phone(&mut self, index: usize) -> ContactResult<()> {
        if index < self.phones.len() {
            self.phones.remove(index);
            Ok(())
        } else {
            Err(ContactError::PhoneIndexOutOfRange { index })
        }
    }

    pub fn set_birthday(&mut self, input: &str) -> ContactResult<()> {
        self.birthday.set(input)
    }

    /// Days from `as_of` to the next occurrence of the birthday.
    /// Returns `None` when no birthday is set. A birthday falling on
    /// `as_of` itself counts as not yet passed and yields 0.
    ///
    /// A Feb 29 birthday anchors to Mar 1 in non-leap years.
    pub fn days_to_birthday(&self, as_of: NaiveDate) -> Option<i64> {
        let raw = self.birthday.value()?;
        let born = validation::birthday_date(raw).ok()?;

        let mut next = anchor(born, as_of.year())?;
        if next < as_of {
            next = anchor(born, as_of.year() + 1)?;
        }
        Some((next - as_of).num_days())
    }
}

/// Re-anchors a birth date's month/day to the given year, falling back
/// to Mar 1 when Feb 29 does not exist in that year.
fn anchor(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        for phone in &self.phones {
            write!(f, "\n{}", phone)?;
        }
        Ok(())
    }
}
