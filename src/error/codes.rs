//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Catalog data errors
//! - 3xx: Config errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 8xx: Terminal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `DataLoadFailed` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Catalog data errors (1xx)
    // ========================================
    /// E101: The catalog document could not be loaded
    DataLoadFailed,
    /// E102: The catalog document is not valid JSON or lacks `items`
    DataMalformed,
    /// E103: The catalog document does not exist at the resolved location
    DataNotFound,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E502: The site answered with a non-success status
    NetworkHttpStatus,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: File operation failed
    IoError,
    /// E602: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Terminal errors (8xx)
    // ========================================
    /// E802: Command needs an interactive terminal
    TerminalRequired,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `DataLoadFailed` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::DataLoadFailed => 101,
            Self::DataMalformed => 102,
            Self::DataNotFound => 103,

            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,

            Self::NetworkHttpStatus => 502,

            Self::IoError => 601,
            Self::SerializationError => 602,

            Self::TerminalRequired => 802,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::DataLoadFailed => "Check `data.site_root` and `data.path` with `elecdex config`",
            Self::DataMalformed => "The catalog must be a JSON object with an `items` array of entries",
            Self::DataNotFound => "Point --site-root at the directory or URL that contains data/electronics.json",

            Self::ConfigInvalid => "Run `elecdex config` to see current values. Check TOML syntax in config file",
            Self::ConfigMissingRequired => "Set the missing value in elecdex.toml or via its ELECDEX_* environment variable",

            Self::NetworkHttpStatus => "Verify the site root URL; the server did not return the catalog",

            Self::IoError => "File operation failed. Check path exists and permissions are correct",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::TerminalRequired => "Run `elecdex browse` from an interactive terminal, or use `elecdex search`",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "data",
            3 => "config",
            5 => "network",
            6 => "storage",
            8 => "terminal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::DataLoadFailed,
            Self::DataMalformed,
            Self::DataNotFound,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::NetworkHttpStatus,
            Self::IoError,
            Self::SerializationError,
            Self::TerminalRequired,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_numeric() {
        assert_eq!(ErrorCode::DataLoadFailed.numeric(), 101);
        assert_eq!(ErrorCode::ConfigInvalid.numeric(), 301);
        assert_eq!(ErrorCode::NetworkHttpStatus.numeric(), 502);
        assert_eq!(ErrorCode::IoError.numeric(), 601);
        assert_eq!(ErrorCode::TerminalRequired.numeric(), 802);
    }

    #[test]
    fn test_all_codes_have_suggestions() {
        for code in ErrorCode::all() {
            assert!(
                !code.suggestion().is_empty(),
                "ErrorCode::{code:?} has empty suggestion"
            );
        }
    }

    #[test]
    fn test_all_codes_have_categories() {
        for code in ErrorCode::all() {
            assert_ne!(code.category(), "unknown", "ErrorCode::{code:?} has invalid category");
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DataLoadFailed).unwrap();
        assert_eq!(json, "\"DATA_LOAD_FAILED\"");

        let deserialized: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ErrorCode::DataLoadFailed);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::DataMalformed), "E102");
        assert_eq!(format!("{}", ErrorCode::TerminalRequired), "E802");
    }

    #[test]
    fn test_recoverable_categorization() {
        assert!(ErrorCode::DataNotFound.is_recoverable());
        assert!(ErrorCode::ConfigInvalid.is_recoverable());
        assert!(!ErrorCode::SerializationError.is_recoverable());
    }

    #[test]
    fn test_no_duplicate_numeric_codes() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::all() {
            assert!(seen.insert(code.numeric()), "Duplicate numeric code: {}", code.numeric());
        }
    }
}
