//! Person and student domain models with validated identity fields and
//! derived demographic calculations (age, academic course, surname
//! letter-frequency count).

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ModelConfig;
pub use error::{ModelError, Result};
pub use models::{
    DEFAULT_OCCUPATION, EntityModel, Person, PersonIdentity, PersonKind, PersonRecord,
    RegularPerson, Student,
};

// Utility functions
pub use utils::count_char_case_insensitive;
