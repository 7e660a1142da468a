//! Domain models for persons and students
//!
//! The shared identity core lives in [`identity`]; the two concrete
//! variants ([`RegularPerson`] and [`Student`]) specialize it, and the
//! [`Person`] enum gathers them into a closed set for heterogeneous
//! collections.

pub mod identity;
pub mod regular;
pub mod student;
pub mod traits;
pub mod types;

pub use identity::PersonIdentity;
pub use regular::{DEFAULT_OCCUPATION, RegularPerson};
pub use student::Student;
pub use traits::{EntityModel, PersonRecord};
pub use types::PersonKind;

use serde::{Deserialize, Serialize};

/// Closed set of person variants.
///
/// Used wherever regular persons and students need to be handled
/// uniformly; the capability set is delegated to the wrapped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    /// A person outside any study programme
    Regular(RegularPerson),
    /// An enrolled student
    Student(Student),
}

impl EntityModel for Person {
    type Id = String;

    fn id(&self) -> &Self::Id {
        match self {
            Self::Regular(person) => person.id(),
            Self::Student(student) => student.id(),
        }
    }

    fn key(&self) -> String {
        match self {
            Self::Regular(person) => person.key(),
            Self::Student(student) => student.key(),
        }
    }
}

impl PersonRecord for Person {
    fn identity(&self) -> &PersonIdentity {
        match self {
            Self::Regular(person) => person.identity(),
            Self::Student(student) => student.identity(),
        }
    }

    fn kind(&self) -> PersonKind {
        match self {
            Self::Regular(_) => PersonKind::Regular,
            Self::Student(_) => PersonKind::Student,
        }
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Regular(person) => person.detail_fields(),
            Self::Student(student) => student.detail_fields(),
        }
    }
}

impl From<RegularPerson> for Person {
    fn from(person: RegularPerson) -> Self {
        Self::Regular(person)
    }
}

impl From<Student> for Person {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}
