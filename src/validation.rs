//! Input validation for talk sets.
//!
//! Checks every talk before packing starts and reports all problems at
//! once. Detects:
//! - Empty titles
//! - Zero durations
//! - Durations longer than the largest session (cannot be placed at all)
//!
//! Parsed talks already satisfy the stricter per-talk maximum from
//! [`DayLayout::max_talk_duration`]; directly constructed talks only need
//! to fit some session.

use crate::config::DayLayout;
use crate::models::Talk;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position of the offending talk in the input.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The title is empty or whitespace.
    EmptyTitle,
    /// The talk takes no time.
    ZeroDuration,
    /// The talk is longer than any session.
    ExceedsSessionCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates a talk set against a day layout.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_talks(talks: &[Talk], layout: &DayLayout) -> ValidationResult {
    let longest_session = layout.morning_capacity().max(layout.afternoon_capacity());
    let mut errors = Vec::new();

    for (index, talk) in talks.iter().enumerate() {
        if talk.title().trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                index,
                format!("Talk #{index} has no title"),
            ));
        }

        if talk.duration() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                index,
                format!("Talk '{}' has zero duration", talk.title()),
            ));
        } else if talk.duration() > longest_session {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExceedsSessionCapacity,
                index,
                format!(
                    "Talk '{}' ({}min) is longer than the longest session ({longest_session}min)",
                    talk.title(),
                    talk.duration()
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
