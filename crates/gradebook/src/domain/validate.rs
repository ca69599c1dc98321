//! Assignment Field Validator
//!
//! Purely syntactic/range validation of assignment fields. Creation
//! requires every field; updates accept any subset but present values obey
//! the same bounds. The validator never consults the store; uniqueness and
//! referential integrity stay with the database constraints.

use chrono::{DateTime, Utc};
use thiserror::Error;

pub const POINTS_MIN: i32 = 1;
pub const POINTS_MAX: i32 = 100;
pub const ATTEMPTS_MIN: i32 = 1;
pub const ATTEMPTS_MAX: i32 = 100;

/// A single-field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

/// Incoming assignment fields before validation.
///
/// Type errors (non-string name, non-numeric points, unparseable deadline)
/// are rejected earlier, by typed deserialization at the DTO boundary; this
/// struct only sees well-typed values that may still be absent or out of
/// range.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFields {
    pub name: Option<String>,
    pub points: Option<i32>,
    pub num_of_attemps: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

/// A complete, validated field set ready to become an [`Assignment`].
///
/// [`Assignment`]: crate::domain::entity::Assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub name: String,
    pub points: i32,
    pub num_of_attemps: i32,
    pub deadline: DateTime<Utc>,
}

/// Validate fields for creation: all required, all within bounds.
pub fn validate_create(fields: AssignmentFields) -> Result<NewAssignment, FieldError> {
    let name = require(fields.name, "name")?;
    check_name(&name)?;
    let points = require(fields.points, "points")?;
    check_range(points, "points", POINTS_MIN, POINTS_MAX)?;
    let num_of_attemps = require(fields.num_of_attemps, "num_of_attemps")?;
    check_range(num_of_attemps, "num_of_attemps", ATTEMPTS_MIN, ATTEMPTS_MAX)?;
    let deadline = require(fields.deadline, "deadline")?;

    Ok(NewAssignment {
        name,
        points,
        num_of_attemps,
        deadline,
    })
}

/// Validate fields for update: each optional, present values within bounds.
pub fn validate_update(fields: &AssignmentFields) -> Result<(), FieldError> {
    if let Some(name) = &fields.name {
        check_name(name)?;
    }
    if let Some(points) = fields.points {
        check_range(points, "points", POINTS_MIN, POINTS_MAX)?;
    }
    if let Some(attempts) = fields.num_of_attemps {
        check_range(attempts, "num_of_attemps", ATTEMPTS_MIN, ATTEMPTS_MAX)?;
    }
    // A present deadline is already a parsed timestamp; nothing further to
    // check here.
    Ok(())
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, FieldError> {
    value.ok_or(FieldError {
        field,
        reason: "is required",
    })
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError {
            field: "name",
            reason: "must not be blank",
        });
    }
    Ok(())
}

fn check_range(value: i32, field: &'static str, min: i32, max: i32) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError {
            field,
            reason: "must be between 1 and 100",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn complete() -> AssignmentFields {
        AssignmentFields {
            name: Some("homework 1".into()),
            points: Some(50),
            num_of_attemps: Some(3),
            deadline: Some(Utc::now() + Duration::days(7)),
        }
    }

    #[test]
    fn test_create_accepts_complete_fields() {
        let validated = validate_create(complete()).unwrap();
        assert_eq!(validated.name, "homework 1");
        assert_eq!(validated.points, 50);
        assert_eq!(validated.num_of_attemps, 3);
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        for field in ["name", "points", "num_of_attemps", "deadline"] {
            let mut fields = complete();
            match field {
                "name" => fields.name = None,
                "points" => fields.points = None,
                "num_of_attemps" => fields.num_of_attemps = None,
                _ => fields.deadline = None,
            }
            let err = validate_create(fields).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.reason, "is required");
        }
    }

    #[test]
    fn test_points_boundaries() {
        for (points, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            let mut fields = complete();
            fields.points = Some(points);
            assert_eq!(validate_create(fields).is_ok(), ok, "points={points}");
        }
    }

    #[test]
    fn test_attempts_boundaries() {
        for (attempts, ok) in [(0, false), (1, true), (100, true), (101, false)] {
            let mut fields = complete();
            fields.num_of_attemps = Some(attempts);
            assert_eq!(validate_create(fields).is_ok(), ok, "attempts={attempts}");
        }
    }

    #[test]
    fn test_update_accepts_partial_fields() {
        let fields = AssignmentFields {
            points: Some(75),
            ..Default::default()
        };
        assert!(validate_update(&fields).is_ok());
        assert!(validate_update(&AssignmentFields::default()).is_ok());
    }

    #[test]
    fn test_update_rejects_out_of_range_when_present() {
        let fields = AssignmentFields {
            points: Some(101),
            ..Default::default()
        };
        assert!(validate_update(&fields).is_err());

        let fields = AssignmentFields {
            num_of_attemps: Some(0),
            ..Default::default()
        };
        assert!(validate_update(&fields).is_err());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let fields = AssignmentFields {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(validate_update(&fields).is_err());
    }

    #[test]
    fn test_validation_is_idempotent() {
        // Same input, same verdict, no state carried between calls.
        let fields = complete();
        let first = validate_create(fields.clone()).unwrap();
        let second = validate_create(fields).unwrap();
        assert_eq!(first, second);
    }
}
