//! Input validation for flow-shop instances.
//!
//! Checks structural integrity of an instance before solving. Detects:
//! - Duplicate job IDs
//! - Duration counts that do not match the machine count
//! - Zero machines
//! - Empty instances
//!
//! The solver performs its own fail-fast checks and surfaces the first
//! violation as a typed [`crate::error::SolveError`]; this module reports
//! ALL problems at once, which is what an ingest layer wants.

use std::collections::HashSet;

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job's duration count does not equal the machine count.
    MachineCountMismatch,
    /// The instance declares zero machines.
    NoMachines,
    /// The instance has no jobs.
    EmptyInstance,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance.
///
/// Checks:
/// 1. At least one machine
/// 2. At least one job
/// 3. No duplicate job IDs
/// 4. Every job carries exactly one duration per machine
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "instance declares zero machines",
        ));
    }

    if instance.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            "instance contains no jobs",
        ));
    }

    let mut job_ids = HashSet::new();
    for job in &instance.jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.machine_count() != instance.machines {
            errors.push(ValidationError::new(
                ValidationErrorKind::MachineCountMismatch,
                format!(
                    "Job {} has {} durations, expected {}",
                    job.id,
                    job.machine_count(),
                    instance.machines
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn sample_instance() -> Instance {
        Instance::from_matrix(2, vec![vec![5, 3], vec![2, 6]])
    }

    #[test]
    fn test_valid_instance() {
        assert!(validate_instance(&sample_instance()).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let instance = Instance::new(1)
            .with_job(Job::new(1, vec![2]))
            .with_job(Job::new(1, vec![3]));

        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_machine_count_mismatch() {
        let instance = Instance::new(3).with_job(Job::new(1, vec![1, 2]));

        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MachineCountMismatch));
    }

    #[test]
    fn test_empty_instance() {
        let errors = validate_instance(&Instance::new(2)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInstance));
    }

    #[test]
    fn test_no_machines() {
        let instance = Instance::new(0).with_job(Job::new(1, vec![1]));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoMachines));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate id + mismatched durations in one report.
        let instance = Instance::new(2)
            .with_job(Job::new(1, vec![1, 2]))
            .with_job(Job::new(1, vec![9]));

        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
