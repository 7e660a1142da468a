//! Student model
//!
//! A student specializes the shared identity core with an admission year
//! and a specialty, and adds the academic course calculation.

use crate::config::ModelConfig;
use crate::error::{ModelError, Result};
use crate::models::identity::{PersonIdentity, validate_name};
use crate::models::traits::{EntityModel, PersonRecord};
use crate::models::types::PersonKind;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    identity: PersonIdentity,
    admission_year: i32,
    specialty: String,
}

impl Student {
    /// Create a new student, validating against the default configuration
    pub fn new(
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
        admission_year: i32,
        specialty: String,
    ) -> Result<Self> {
        Self::with_config(
            &ModelConfig::default(),
            first_name,
            last_name,
            middle_name,
            birth_date,
            admission_year,
            specialty,
        )
    }

    /// Create a new student, validating against an explicit configuration
    pub fn with_config(
        config: &ModelConfig,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
        admission_year: i32,
        specialty: String,
    ) -> Result<Self> {
        let identity =
            PersonIdentity::with_config(config, first_name, last_name, middle_name, birth_date)?;
        validate_admission_year(config, admission_year)?;
        validate_name("specialty", &specialty)?;

        Ok(Self {
            identity,
            admission_year,
            specialty,
        })
    }

    /// Get a reference to the underlying identity
    #[must_use]
    pub fn identity(&self) -> &PersonIdentity {
        &self.identity
    }

    /// Year of admission
    #[must_use]
    pub fn admission_year(&self) -> i32 {
        self.admission_year
    }

    /// Specialty the student is enrolled in
    #[must_use]
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Replace the admission year, revalidating it against the default
    /// configuration
    pub fn set_admission_year(&mut self, admission_year: i32) -> Result<()> {
        self.set_admission_year_with_config(&ModelConfig::default(), admission_year)
    }

    /// Replace the admission year, revalidating it against an explicit
    /// configuration
    pub fn set_admission_year_with_config(
        &mut self,
        config: &ModelConfig,
        admission_year: i32,
    ) -> Result<()> {
        validate_admission_year(config, admission_year)?;
        self.admission_year = admission_year;
        Ok(())
    }

    /// Replace the specialty, rejecting blank values
    pub fn set_specialty(&mut self, specialty: String) -> Result<()> {
        validate_name("specialty", &specialty)?;
        self.specialty = specialty;
        Ok(())
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

    /// Replace the identity and the student-specific fields in one call.
    ///
    /// Validation runs before any field is touched, so a failed call
    /// leaves the record unchanged.
    pub fn set_student_data(
        &mut self,
        first_name: String,
        last_name: String,
        middle_name: String,
        birth_date: NaiveDate,
        admission_year: i32,
        specialty: String,
    ) -> Result<()> {
        *self = Self::new(
            first_name,
            last_name,
            middle_name,
            birth_date,
            admission_year,
            specialty,
        )?;
        Ok(())
    }

    /// Calculate the current course (year of study) at a reference date,
    /// using the default academic calendar
    #[must_use]
    pub fn course_at(&self, reference: NaiveDate) -> u32 {
        self.course_at_with_config(&ModelConfig::default(), reference)
    }

    /// Calculate the current course at a reference date.
    ///
    /// Before the academic rollover month the student is still completing
    /// the previous academic year's course. The result is floored at zero,
    /// and a reference year before the admission year yields zero outright.
    #[must_use]
    pub fn course_at_with_config(&self, config: &ModelConfig, reference: NaiveDate) -> u32 {
        if reference.year() < self.admission_year {
            return 0;
        }

        let mut course = reference.year() - self.admission_year;

        if reference.month() < config.academic_year_start_month {
            course -= 1;
        }

        course.max(0) as u32
    }
}

impl EntityModel for Student {
    type Id = String;

    fn id(&self) -> &Self::Id {
        self.identity.id()
    }

    fn key(&self) -> String {
        self.identity.key()
    }
}

impl PersonRecord for Student {
    fn identity(&self) -> &PersonIdentity {
        &self.identity
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Student
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Admission year", self.admission_year.to_string()),
            ("Specialty", self.specialty.clone()),
        ]
    }
}

fn validate_admission_year(config: &ModelConfig, year: i32) -> Result<()> {
    let max = Local::now().year() + config.admission_year_headroom;

    if year < config.min_birth_year || year > max {
        return Err(ModelError::AdmissionYearOutOfRange {
            year,
            min: config.min_birth_year,
            max,
        });
    }
    Ok(())
}
