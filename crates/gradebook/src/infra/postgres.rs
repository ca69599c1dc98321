//! PostgreSQL Store Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Account, Assignment, Submission};
use crate::domain::repository::{
    AccountRepository, AssignmentRepository, StoreHealth, SubmissionRepository,
};
use crate::domain::value_object::{Email, SubmissionUrl};
use crate::error::GradebookResult;

/// PostgreSQL-backed gradebook store
#[derive(Clone)]
pub struct PgGradebookStore {
    pool: PgPool,
}

impl PgGradebookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgGradebookStore {
    async fn create_account(&self, account: &Account) -> GradebookResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id,
                first_name,
                last_name,
                email,
                password_hash,
                account_created,
                account_updated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.account_created)
        .bind(account.account_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_account_by_email(&self, email: &str) -> GradebookResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                password_hash,
                account_created,
                account_updated
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_entity))
    }
}

// ============================================================================
// Assignment Repository Implementation
// ============================================================================

impl AssignmentRepository for PgGradebookStore {
    async fn create_assignment(&self, assignment: &Assignment) -> GradebookResult<()> {
        sqlx::query(
            r#"
            INSERT INTO assignments (
                id,
                name,
                points,
                num_of_attemps,
                deadline,
                created_by,
                assignment_created,
                assignment_updated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(assignment.id)
        .bind(&assignment.name)
        .bind(assignment.points)
        .bind(assignment.num_of_attemps)
        .bind(assignment.deadline)
        .bind(&assignment.created_by)
        .bind(assignment.assignment_created)
        .bind(assignment.assignment_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_assignment_by_id(&self, id: Uuid) -> GradebookResult<Option<Assignment>> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT
                id,
                name,
                points,
                num_of_attemps,
                deadline,
                created_by,
                assignment_created,
                assignment_updated
            FROM assignments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AssignmentRow::into_entity))
    }

    async fn list_assignments(&self) -> GradebookResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT
                id,
                name,
                points,
                num_of_attemps,
                deadline,
                created_by,
                assignment_created,
                assignment_updated
            FROM assignments
            ORDER BY assignment_created
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AssignmentRow::into_entity).collect())
    }

    async fn update_assignment(&self, assignment: &Assignment) -> GradebookResult<()> {
        sqlx::query(
            r#"
            UPDATE assignments
            SET name = $2,
                points = $3,
                num_of_attemps = $4,
                deadline = $5,
                assignment_updated = $6
            WHERE id = $1
            "#,
        )
        .bind(assignment.id)
        .bind(&assignment.name)
        .bind(assignment.points)
        .bind(assignment.num_of_attemps)
        .bind(assignment.deadline)
        .bind(assignment.assignment_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_assignment(&self, id: Uuid) -> GradebookResult<()> {
        // Submissions go with the assignment via ON DELETE CASCADE.
        sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Submission Repository Implementation
// ============================================================================

impl SubmissionRepository for PgGradebookStore {
    async fn insert_submission(&self, submission: &Submission) -> GradebookResult<()> {
        sqlx::query(
            r#"
            INSERT INTO submissions (
                id,
                assignment_id,
                submission_url,
                submitted_by,
                submission_date,
                submission_updated
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(submission.id)
        .bind(submission.assignment_id)
        .bind(submission.submission_url.as_str())
        .bind(&submission.submitted_by)
        .bind(submission.submission_date)
        .bind(submission.submission_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_submissions(
        &self,
        assignment_id: Uuid,
        submitted_by: &str,
    ) -> GradebookResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM submissions
            WHERE assignment_id = $1 AND submitted_by = $2
            "#,
        )
        .bind(assignment_id)
        .bind(submitted_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

impl StoreHealth for PgGradebookStore {
    async fn ping(&self) -> GradebookResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    account_created: DateTime<Utc>,
    account_updated: DateTime<Utc>,
}

impl AccountRow {
    fn into_entity(self) -> Account {
        Account {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            password_hash: self.password_hash,
            account_created: self.account_created,
            account_updated: self.account_updated,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: Uuid,
    name: String,
    points: i32,
    num_of_attemps: i32,
    deadline: DateTime<Utc>,
    created_by: String,
    assignment_created: DateTime<Utc>,
    assignment_updated: DateTime<Utc>,
}

impl AssignmentRow {
    fn into_entity(self) -> Assignment {
        Assignment {
            id: self.id,
            name: self.name,
            points: self.points,
            num_of_attemps: self.num_of_attemps,
            deadline: self.deadline,
            created_by: self.created_by,
            assignment_created: self.assignment_created,
            assignment_updated: self.assignment_updated,
        }
    }
}
