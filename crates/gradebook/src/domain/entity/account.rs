//! Account Entity
//!
//! Identity record. The email doubles as the authentication principal and
//! as the (weak, string-typed) owner reference on assignments.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::Email;

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique; uniqueness is enforced by the store
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: String,
    pub account_created: DateTime<Utc>,
    pub account_updated: DateTime<Utc>,
}

impl Account {
    /// Create a new account with fresh timestamps.
    pub fn new(first_name: String, last_name: String, email: Email, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            password_hash,
            account_created: now,
            account_updated: now,
        }
    }

    /// Replace the stored hash. The only mutation accounts support.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.account_updated = Utc::now();
    }
}

/// The authenticated actor attached to a request after basic auth.
///
/// Deliberately small: downstream authorization only needs the identity,
/// never the credential material.
#[derive(Debug, Clone)]
pub struct Principal {
    pub account_id: Uuid,
    pub email: String,
}

impl From<&Account> for Principal {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            email: account.email.as_str().to_string(),
        }
    }
}
