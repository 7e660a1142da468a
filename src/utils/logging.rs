//! Logging utilities
//!
//! This module provides standardized logging functions for the
//! demonstration driver and model lifecycle events.

/// Log the start of a demonstration step with consistent format
///
/// # Arguments
/// * `step` - Description of the step
pub fn log_demo_step(step: &str) {
    log::info!("--- {step} ---");
}

/// Log the creation of a model entity with consistent format
///
/// # Arguments
/// * `kind` - Human-readable entity kind
/// * `last_name` - Surname identifying the entity
pub fn log_entity_created(kind: &str, last_name: &str) {
    log::debug!("Created {kind} '{last_name}'");
}

/// Log the release of a model entity at the end of its scope
///
/// # Arguments
/// * `kind` - Human-readable entity kind
/// * `last_name` - Surname identifying the entity
pub fn log_entity_released(kind: &str, last_name: &str) {
    log::debug!("Released {kind} '{last_name}'");
}

/// Log a calculation result with consistent format
///
/// # Arguments
/// * `what` - Description of the calculated quantity
/// * `value` - The computed value
pub fn log_calculation(what: &str, value: i64) {
    log::debug!("Calculated {what}: {value}");
}
