//! Authenticate Use Case
//!
//! Resolves basic auth credentials to a [`Principal`]. Every protected
//! request re-runs this; there are no sessions or tokens.

use std::sync::Arc;

use platform::password::verify_password;

use crate::domain::entity::Principal;
use crate::domain::repository::AccountRepository;
use crate::error::{GradebookError, GradebookResult};

/// Credentials extracted from an `Authorization: Basic` header.
///
/// Either part may be empty, which counts as missing credentials rather
/// than a lookup for an empty email.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> AuthenticateUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }

    pub async fn execute(&self, credentials: BasicCredentials) -> GradebookResult<Principal> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(GradebookError::MissingCredentials);
        }

        // Exact lookup. No trimming, no case folding; the email must match
        // the stored value byte for byte.
        let account = self
            .account_repo
            .find_account_by_email(&credentials.email)
            .await?
            .ok_or(GradebookError::UserNotFound)?;

        let valid = verify_password(&credentials.password, &account.password_hash)
            .map_err(|e| GradebookError::Internal(e.to_string()))?;

        if !valid {
            return Err(GradebookError::InvalidPassword);
        }

        Ok(Principal::from(&account))
    }
}
