//! Batch input validation.
//!
//! Enforced before the engine runs: the engine itself assumes these
//! constraints and does not re-verify them (except for the documented
//! graceful degradation on unparseable dates).

use thiserror::Error;

use crate::domain::models::TaskInput;

/// Longest accepted task title.
pub const MAX_TITLE_LENGTH: usize = 300;

/// Validation failures, each naming the offending record's 0-based
/// position in the batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Title missing or blank.
    #[error("Task {index}: title must not be empty")]
    EmptyTitle {
        /// Position of the offending record.
        index: usize,
    },

    /// Title over [`MAX_TITLE_LENGTH`] characters.
    #[error("Task {index}: title is {length} characters, maximum is {MAX_TITLE_LENGTH}")]
    TitleTooLong {
        /// Position of the offending record.
        index: usize,
        /// Observed title length.
        length: usize,
    },

    /// Estimated hours negative or not a finite number.
    #[error("Task {index}: estimated_hours must be a finite non-negative number, got {value}")]
    InvalidEstimatedHours {
        /// Position of the offending record.
        index: usize,
        /// Observed value.
        value: f64,
    },

    /// Importance outside the 1-10 scale.
    #[error("Task {index}: importance must be between 1 and 10, got {value}")]
    ImportanceOutOfRange {
        /// Position of the offending record.
        index: usize,
        /// Observed value.
        value: i64,
    },
}

/// Validate a whole batch, failing on the first violation.
pub fn validate_batch(batch: &[TaskInput]) -> Result<(), ValidationError> {
    for (index, task) in batch.iter().enumerate() {
        if task.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle { index });
        }
        let length = task.title.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong { index, length });
        }
        if !task.estimated_hours.is_finite() || task.estimated_hours < 0.0 {
            return Err(ValidationError::InvalidEstimatedHours {
                index,
                value: task.estimated_hours,
            });
        }
        if !(1..=10).contains(&task.importance) {
            return Err(ValidationError::ImportanceOutOfRange {
                index,
                value: task.importance,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch_passes() {
        let batch = vec![
            TaskInput::new("Write report").with_importance(10),
            TaskInput::new("Review PR")
                .with_estimated_hours(0.0)
                .with_importance(1),
        ];
        assert_eq!(validate_batch(&batch), Ok(()));
    }

    #[test]
    fn test_blank_title_rejected() {
        let batch = vec![TaskInput::new("ok"), TaskInput::new("   ")];
        assert_eq!(
            validate_batch(&batch),
            Err(ValidationError::EmptyTitle { index: 1 })
        );
    }

    #[test]
    fn test_overlong_title_rejected() {
        let batch = vec![TaskInput::new("x".repeat(301))];
        assert_eq!(
            validate_batch(&batch),
            Err(ValidationError::TitleTooLong {
                index: 0,
                length: 301
            })
        );
    }

    #[test]
    fn test_negative_hours_rejected() {
        let batch = vec![TaskInput::new("ok").with_estimated_hours(-1.0)];
        assert!(matches!(
            validate_batch(&batch),
            Err(ValidationError::InvalidEstimatedHours { index: 0, .. })
        ));
    }

    #[test]
    fn test_nan_hours_rejected() {
        let batch = vec![TaskInput::new("ok").with_estimated_hours(f64::NAN)];
        assert!(matches!(
            validate_batch(&batch),
            Err(ValidationError::InvalidEstimatedHours { index: 0, .. })
        ));
    }

    #[test]
    fn test_importance_out_of_range_rejected() {
        let low = vec![TaskInput::new("ok").with_importance(0)];
        let high = vec![TaskInput::new("ok").with_importance(11)];
        assert_eq!(
            validate_batch(&low),
            Err(ValidationError::ImportanceOutOfRange { index: 0, value: 0 })
        );
        assert_eq!(
            validate_batch(&high),
            Err(ValidationError::ImportanceOutOfRange {
                index: 0,
                value: 11
            })
        );
    }
}
