//! Assignment Entity
//!
//! A gradable task, owned by the account that created it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Assignment entity
///
/// `num_of_attemps` keeps the historical wire and column spelling;
/// renaming it would break every existing client and row.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: Uuid,
    pub name: String,
    /// In [1, 100], enforced by the field validator before persistence
    pub points: i32,
    /// In [1, 100], enforced by the field validator before persistence
    pub num_of_attemps: i32,
    pub deadline: DateTime<Utc>,
    /// Creator's email. A plain string, compared exactly and
    /// case-sensitively for ownership checks.
    pub created_by: String,
    pub assignment_created: DateTime<Utc>,
    pub assignment_updated: DateTime<Utc>,
}

impl Assignment {
    /// Create a new assignment owned by `created_by`.
    pub fn new(
        name: String,
        points: i32,
        num_of_attemps: i32,
        deadline: DateTime<Utc>,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            points,
            num_of_attemps,
            deadline,
            created_by,
            assignment_created: now,
            assignment_updated: now,
        }
    }

    /// Exact, case-sensitive ownership check.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.created_by == email
    }

    /// Bump the updated timestamp after a mutation.
    pub fn touch(&mut self) {
        self.assignment_updated = Utc::now();
    }
}
