//! Email Value Object
//!
//! A syntactically validated email address. Case is preserved: both
//! authentication lookup and assignment ownership compare emails as exact
//! strings, matching the stored value byte for byte.

use crate::domain::validate::FieldError;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation. Surrounding whitespace is
    /// trimmed; nothing else about the input is altered.
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(FieldError {
                field: "email",
                reason: "must not be empty",
            });
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(FieldError {
                field: "email",
                reason: "must be at most 254 characters",
            });
        }

        if !Self::is_valid_format(&email) {
            return Err(FieldError {
                field: "email",
                reason: "is not a valid email address",
            });
        }

        Ok(Self(email))
    }

    /// Basic structural validation: one `@`, plausible local and domain
    /// parts. Actual deliverability is out of scope.
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.len() > 64 {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }

    /// Create from a database value (assumed already validated).
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a string for database storage.
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@.example.com").is_err());
    }

    #[test]
    fn test_email_case_is_preserved() {
        // Ownership comparison is exact, so the original casing must survive.
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }
}
