//! Regular person model
//!
//! A person outside any study programme: the shared identity core plus a
//! free-text occupation, defaulted to a placeholder when absent.

use crate::config::ModelConfig;
use crate::error::Result;
use crate::models::identity::PersonIdentity;
use crate::models::traits::{EntityModel, PersonRecord};
use crate::models::types::PersonKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder used when no occupation is supplied
pub const DEFAULT_OCCUPATION: &str = "Not specified";

/// A person with an occupation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularPerson {
    identity: PersonIdentity,
    occupation: String,
}

impl RegularPerson {
    /// Create a new person, validating against the default configuration
    pub fn new(
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
        occupation: Option<String>,
    ) -> Result<Self> {
        Self::with_config(
            &ModelConfig::default(),
            first_name,
            last_name,
            middle_name,
            birth_date,
            occupation,
        )
    }

    /// Create a new person, validating against an explicit configuration
    pub fn with_config(
        config: &ModelConfig,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
        occupation: Option<String>,
    ) -> Result<Self> {
        let identity =
            PersonIdentity::with_config(config, first_name, last_name, middle_name, birth_date)?;

        Ok(Self {
            identity,
            occupation: occupation_or_default(occupation),
        })
    }

    /// Get a reference to the underlying identity
    #[must_use]
    pub fn identity(&self) -> &PersonIdentity {
        &self.identity
    }

    /// Occupation text
    #[must_use]
    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    /// Replace the occupation; `None` or a blank value falls back to the
    /// placeholder
    pub fn set_occupation(&mut self, occupation: Option<String>) {
        self.occupation = occupation_or_default(occupation);
    }

    /// Replace all identity fields at once, revalidating them
    pub fn set_data(
        &mut self,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
    ) -> Result<()> {
        self.identity
            .set_data(first_name, last_name, middle_name, birth_date)
    }
}

impl EntityModel for RegularPerson {
    type Id = String;

    fn id(&self) -> &Self::Id {
        self.identity.id()
    }

    fn key(&self) -> String {
        self.identity.key()
    }
}

impl PersonRecord for RegularPerson {
    fn identity(&self) -> &PersonIdentity {
        &self.identity
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Regular
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Occupation", self.occupation.clone())]
    }
}

fn occupation_or_default(occupation: Option<String>) -> String {
    occupation
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OCCUPATION.to_string())
}
