//! Submission URL Value Object
//!
//! A syntactically valid http(s) URL. The submission gate only checks that
//! a URL was supplied at all; this type enforces the data-model invariant
//! that what gets persisted actually looks like a URL.

use crate::domain::validate::FieldError;

/// Submission URL value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionUrl(String);

impl SubmissionUrl {
    /// Create a new submission URL with validation.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let url = raw.into().trim().to_string();

        if url.is_empty() {
            return Err(FieldError {
                field: "submission_url",
                reason: "must not be empty",
            });
        }

        if !Self::is_valid_format(&url) {
            return Err(FieldError {
                field: "submission_url",
                reason: "must be a valid http(s) URL",
            });
        }

        Ok(Self(url))
    }

    /// Scheme plus non-empty host with a dot; no whitespace anywhere.
    fn is_valid_format(url: &str) -> bool {
        if url.chars().any(char::is_whitespace) {
            return false;
        }

        let rest = if let Some(rest) = url.strip_prefix("https://") {
            rest
        } else if let Some(rest) = url.strip_prefix("http://") {
            rest
        } else {
            return false;
        };

        let host = rest.split(['/', '?', '#']).next().unwrap_or("");
        !host.is_empty() && host.contains('.')
    }

    /// Create from a database value (assumed already validated).
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a string for database storage.
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SubmissionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SubmissionUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_valid() {
        assert!(SubmissionUrl::new("https://example.com/work.zip").is_ok());
        assert!(SubmissionUrl::new("http://github.com/user/repo").is_ok());
        assert!(SubmissionUrl::new("https://example.com/a?b=c#d").is_ok());
    }

    #[test]
    fn test_url_invalid() {
        assert!(SubmissionUrl::new("").is_err());
        assert!(SubmissionUrl::new("   ").is_err());
        assert!(SubmissionUrl::new("example.com/work.zip").is_err());
        assert!(SubmissionUrl::new("ftp://example.com/work.zip").is_err());
        assert!(SubmissionUrl::new("https://").is_err());
        assert!(SubmissionUrl::new("https://nodot/path").is_err());
        assert!(SubmissionUrl::new("https://exa mple.com").is_err());
    }

    #[test]
    fn test_url_is_trimmed() {
        let url = SubmissionUrl::new("  https://example.com/x  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/x");
    }
}
