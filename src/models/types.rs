//! Common domain type definitions
//!
//! This module contains enum types shared across the person models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of person represented by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    /// A person outside any study programme
    Regular,
    /// An enrolled student
    Student,
}

impl From<&str> for PersonKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "student" | "2" => Self::Student,
            _ => Self::Regular,
        }
    }
}

impl From<i32> for PersonKind {
    fn from(value: i32) -> Self {
        match value {
            2 => Self::Student,
            _ => Self::Regular,
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => write!(f, "Regular person"),
            Self::Student => write!(f, "Student"),
        }
    }
}
