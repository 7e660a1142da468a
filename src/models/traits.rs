//! Trait definitions for person models
//!
//! This module defines the capability set shared by every person variant:
//! identity access, the derived calculations, and the display projections.

use crate::error::Result;
use crate::models::identity::PersonIdentity;
use crate::models::types::PersonKind;
use chrono::NaiveDate;
use std::hash::Hash;

/// A trait that all person models implement.
///
/// `EntityModel` provides common functionality for identifying models,
/// including identifier access and lookup-key derivation.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the identifier (surname) for this model
    fn id(&self) -> &Self::Id;

    /// Create a unique key string representation: the full name
    fn key(&self) -> String;
}

/// Capability set implemented by every person variant.
///
/// Implementors provide the identity core, their kind, and their
/// variant-specific fields; the calculations and display projections
/// are derived from those.
pub trait PersonRecord {
    /// Get the identity core (names and birth date) of this person
    fn identity(&self) -> &PersonIdentity;

    /// Get the kind of person this record represents
    fn kind(&self) -> PersonKind;

    /// Variant-specific label/value pairs appended to displays
    fn detail_fields(&self) -> Vec<(&'static str, String)>;

    /// Calculate whole years of age at a reference date
    fn age_at(&self, reference: NaiveDate) -> Result<i32> {
        self.identity().age_at(reference)
    }

    /// Count occurrences of a letter in the surname, case-insensitively
    fn count_letter_in_last_name(&self, letter: char) -> usize {
        self.identity().count_letter_in_last_name(letter)
    }

    /// Render all fields as human-readable lines
    fn info_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Kind: {}", self.kind())];
        lines.extend(self.identity().info_lines());
        lines.extend(
            self.detail_fields()
                .into_iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
        lines
    }

    /// Render a single-line summary of this person
    fn formatted_info(&self) -> String {
        let mut info = format!("{}: {}", self.kind(), self.identity().summary());
        for (label, value) in self.detail_fields() {
            info.push_str(&format!(", {label}: {value}"));
        }
        info
    }

    /// Print the full field listing to stdout
    fn display_info(&self) {
        for line in self.info_lines() {
            println!("{line}");
        }
    }
}
