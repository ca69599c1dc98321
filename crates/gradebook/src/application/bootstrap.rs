//! Account Bootstrap
//!
//! Loads accounts from a CSV file at startup. Rows for emails that already
//! exist are skipped, so the import is idempotent across restarts.
//! Passwords in the file are plaintext and are hashed before storage.

use std::path::Path;

use serde::Deserialize;

use platform::password::hash_password;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Email;
use crate::error::{GradebookError, GradebookResult};

/// One row of the bootstrap file.
#[derive(Debug, Deserialize)]
struct AccountRecord {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

/// What the import did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
}

/// Import accounts from `path`.
///
/// Malformed rows and rows with invalid emails are logged and skipped;
/// only an unreadable file or a store failure aborts the import.
pub async fn import_accounts_csv<A>(
    account_repo: &A,
    path: &Path,
) -> GradebookResult<ImportSummary>
where
    A: AccountRepository + Sync,
{
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| GradebookError::Internal(format!("cannot open accounts file: {e}")))?;

    let mut summary = ImportSummary::default();

    for (line, record) in reader.deserialize::<AccountRecord>().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping malformed account row");
                summary.skipped += 1;
                continue;
            }
        };

        let email = match Email::new(&record.email) {
            Ok(email) => email,
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping account row with invalid email");
                summary.skipped += 1;
                continue;
            }
        };

        if account_repo
            .find_account_by_email(email.as_str())
            .await?
            .is_some()
        {
            summary.skipped += 1;
            continue;
        }

        let password_hash = hash_password(&record.password)
            .map_err(|e| GradebookError::Internal(e.to_string()))?;

        let account = Account::new(record.first_name, record.last_name, email, password_hash);
        account_repo.create_account(&account).await?;
        summary.created += 1;
    }

    tracing::info!(
        created = summary.created,
        skipped = summary.skipped,
        "account bootstrap finished"
    );

    Ok(summary)
}
