//! Configuration for model validation and derived calculations.

/// Bounds and calendar conventions used when validating person models
/// and computing derived values.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Lowest birth year (and admission year) accepted by validation
    pub min_birth_year: i32,
    /// Month in which an academic year begins (1-12)
    pub academic_year_start_month: u32,
    /// How many years past the current one an admission year may lie
    pub admission_year_headroom: i32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            min_birth_year: 1900,
            academic_year_start_month: 9,
            admission_year_headroom: 1,
        }
    }
}
