//! Utility functions shared across the crate.

pub mod logging;
pub mod text;

pub use text::count_char_case_insensitive;
