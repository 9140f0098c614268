//! Custom error types for herald with improved type safety and error handling.

use thiserror::Error;

/// Main error type for herald operations.
#[derive(Error, Debug)]
pub enum HeraldError {
    // Version errors - automatic conversion via #[from]
    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    // Changelog errors
    #[error("Changelog parse error: {0}")]
    Parse(String),

    #[error("Regular expression error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeraldError {
    /// Create a changelog parse error with context.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = HeraldError::parse("heading does not match");
        assert_eq!(
            err.to_string(),
            "Changelog parse error: heading does not match"
        );
    }

    #[test]
    fn test_from_conversions() {
        let semver_err = semver::Version::parse("invalid");
        assert!(semver_err.is_err());
        let err: HeraldError = semver_err.unwrap_err().into();
        assert!(matches!(err, HeraldError::InvalidVersion(_)));
    }
}
