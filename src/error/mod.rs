//! Error handling for the person models.

use chrono::NaiveDate;

/// Errors raised when constructing or mutating a person model fails
/// validation, or when a derived calculation receives an invalid argument.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A name-like text field was empty or whitespace-only
    #[error("{field} must not be blank")]
    BlankField {
        /// Which field was rejected
        field: &'static str,
    },

    /// A birth date later than the current system date
    #[error("birth date {date} is in the future")]
    BirthDateInFuture {
        /// The rejected date
        date: NaiveDate,
    },

    /// A birth date earlier than the configured minimum year
    #[error("birth date year {year} is earlier than {min_year}")]
    BirthDateTooEarly {
        /// Year of the rejected date
        year: i32,
        /// Lowest accepted year
        min_year: i32,
    },

    /// An admission year outside the accepted range
    #[error("admission year {year} is outside {min}..={max}")]
    AdmissionYearOutOfRange {
        /// The rejected year
        year: i32,
        /// Lowest accepted year
        min: i32,
        /// Highest accepted year
        max: i32,
    },

    /// An age calculation whose reference date precedes the birth date
    #[error("reference date {reference} precedes birth date {birth}")]
    ReferenceBeforeBirth {
        /// The reference date supplied to the calculation
        reference: NaiveDate,
        /// The birth date on record
        birth: NaiveDate,
    },
}

/// Result type for person model operations
pub type Result<T> = std::result::Result<T, ModelError>;
