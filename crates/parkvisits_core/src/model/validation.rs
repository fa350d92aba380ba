//! Field rules and the shared model error type.
//!
//! # Responsibility
//! - Own every length bound used by visitor, park and trip write paths.
//! - Report failures as one of two categories: type mismatch or out of range.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Rule functions are pure; callers run them before any write or registry append.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum visitor name length, inclusive.
pub const VISITOR_NAME_MIN_CHARS: usize = 1;
/// Maximum visitor name length, inclusive.
pub const VISITOR_NAME_MAX_CHARS: usize = 15;
/// Minimum national park name length, inclusive.
pub const PARK_NAME_MIN_CHARS: usize = 3;
/// Minimum trip date length, inclusive. The format is otherwise free-form.
pub const TRIP_DATE_MIN_CHARS: usize = 7;

pub type ModelResult<T> = Result<T, ModelError>;

/// Coarse error category, stable for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorKind {
    TypeMismatch,
    OutOfRange,
}

/// Validation failure raised by constructors, mutators and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Argument is not an acceptable instance of the required entity kind.
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    /// Text argument length is outside its bounds.
    OutOfRange {
        field: &'static str,
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
}

impl ModelError {
    pub fn kind(&self) -> ModelErrorKind {
        match self {
            Self::TypeMismatch { .. } => ModelErrorKind::TypeMismatch,
            Self::OutOfRange { .. } => ModelErrorKind::OutOfRange,
        }
    }

    /// Name of the offending field or argument.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TypeMismatch { field, .. } | Self::OutOfRange { field, .. } => *field,
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { field, expected } => {
                write!(f, "{field} must be {expected}")
            }
            Self::OutOfRange {
                field,
                min,
                max: Some(max),
                actual,
            } => write!(
                f,
                "{field} must be between {min} and {max} characters, got {actual}"
            ),
            Self::OutOfRange {
                field,
                min,
                max: None,
                actual,
            } => write!(
                f,
                "{field} must be at least {min} characters long, got {actual}"
            ),
        }
    }
}

impl Error for ModelError {}

pub(crate) fn validate_visitor_name(name: &str) -> ModelResult<()> {
    check_length(
        "visitor name",
        name,
        VISITOR_NAME_MIN_CHARS,
        Some(VISITOR_NAME_MAX_CHARS),
    )
}

pub(crate) fn validate_park_name(name: &str) -> ModelResult<()> {
    check_length("national park name", name, PARK_NAME_MIN_CHARS, None)
}

pub(crate) fn validate_trip_date(field: &'static str, value: &str) -> ModelResult<()> {
    check_length(field, value, TRIP_DATE_MIN_CHARS, None)
}

fn check_length(field: &'static str, value: &str, min: usize, max: Option<usize>) -> ModelResult<()> {
    let actual = value.chars().count();
    let too_long = max.is_some_and(|max| actual > max);
    if actual < min || too_long {
        return Err(ModelError::OutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}
