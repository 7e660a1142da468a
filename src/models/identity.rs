//! Core person identity definition
//!
//! This module contains the validated identity core shared by all person
//! variants, together with the age and letter-frequency calculations.

use crate::config::ModelConfig;
use crate::error::{ModelError, Result};
use crate::models::traits::EntityModel;
use crate::utils::text::count_char_case_insensitive;
use chrono::{Datelike, Local, NaiveDate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Validated identity core of a person: names and birth date.
///
/// Fields are private so every mutation goes through validation; getters
/// return exactly the values supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonIdentity {
    first_name: String,
    last_name: String,
    middle_name: String,
    birth_date: NaiveDate,
}

impl PersonIdentity {
    /// Create a new identity, validating against the default configuration
    pub fn new(
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
    ) -> Result<Self> {
        Self::with_config(
            &ModelConfig::default(),
            first_name,
            last_name,
            middle_name,
            birth_date,
        )
    }

    /// Create a new identity, validating against an explicit configuration
    pub fn with_config(
        config: &ModelConfig,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
    ) -> Result<Self> {
        validate_name("first name", &first_name)?;
        validate_name("last name", &last_name)?;
        validate_name("middle name", &middle_name)?;
        validate_birth_date(config, birth_date)?;

        Ok(Self {
            first_name,
            last_name,
            middle_name,
            birth_date,
        })
    }

    /// Replace all identity fields at once.
    ///
    /// Validation runs before any field is touched, so a failed call
    /// leaves the identity unchanged.
    pub fn set_data(
        &mut self,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
    ) -> Result<()> {
        *self = Self::new(first_name, last_name, middle_name, birth_date)?;
        Ok(())
    }

    /// First name
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name (surname)
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Middle name (patronymic)
    #[must_use]
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    /// Birth date
    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Full name ordered surname-first
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            self.last_name.as_str(),
            self.first_name.as_str(),
            self.middle_name.as_str(),
        ]
        .iter()
        .join(" ")
    }

    /// Calculate whole years of age at a reference date.
    ///
    /// The year difference is decremented by one when the reference
    /// month/day falls strictly before the birth month/day, i.e. the
    /// birthday has not been reached yet that year.
    pub fn age_at(&self, reference: NaiveDate) -> Result<i32> {
        if reference < self.birth_date {
            return Err(ModelError::ReferenceBeforeBirth {
                reference,
                birth: self.birth_date,
            });
        }

        let mut age = reference.year() - self.birth_date.year();

        if reference.month() < self.birth_date.month()
            || (reference.month() == self.birth_date.month()
                && reference.day() < self.birth_date.day())
        {
            age -= 1;
        }

        Ok(age)
    }

    /// Count occurrences of a letter in the surname, case-insensitively
    /// with full Unicode folding
    #[must_use]
    pub fn count_letter_in_last_name(&self, letter: char) -> usize {
        count_char_case_insensitive(&self.last_name, letter)
    }

    /// Render the identity fields as human-readable lines
    #[must_use]
    pub fn info_lines(&self) -> Vec<String> {
        vec![
            format!("First name: {}", self.first_name),
            format!("Last name: {}", self.last_name),
            format!("Middle name: {}", self.middle_name),
            format!("Birth date: {}", self.birth_date.format("%d.%m.%Y")),
        ]
    }

    /// Render a single-line summary of the identity
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}, {}", self.full_name(), self.birth_date.format("%d.%m.%Y"))
    }
}

// Implement EntityModel trait
impl EntityModel for PersonIdentity {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.last_name
    }

    fn key(&self) -> String {
        self.full_name()
    }
}

/// Reject blank or whitespace-only name-like fields
pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::BlankField { field });
    }
    Ok(())
}

fn validate_birth_date(config: &ModelConfig, date: NaiveDate) -> Result<()> {
    let today = Local::now().date_naive();

    if date > today {
        return Err(ModelError::BirthDateInFuture { date });
    }
    if date.year() < config.min_birth_year {
        return Err(ModelError::BirthDateTooEarly {
            year: date.year(),
            min_year: config.min_birth_year,
        });
    }
    Ok(())
}
