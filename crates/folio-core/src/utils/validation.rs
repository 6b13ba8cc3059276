//! Input validation utilities
//!
//! Checks applied to configuration values and contact form input.

use crate::error::ConfigError;

/// Validate that a URL is properly formatted
pub fn validate_url(field: &str, url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        }
        .into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Loose email check used by the contact form: an `@` is all that is required.
pub fn looks_like_email(email: &str) -> bool {
    email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("relay.endpoint", "http://localhost:3000").is_ok());
        assert!(validate_url("relay.endpoint", "https://formspree.io/f/abc").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("relay.endpoint", "").is_err());
        assert!(validate_url("relay.endpoint", "formspree.io/f/abc").is_err());
        assert!(validate_url("relay.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("@"));
        assert!(!looks_like_email("ada.example.com"));
    }
}
