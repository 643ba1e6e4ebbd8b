//! The error-code vocabulary shared by every API response.
//!
//! Each code carries three views: a SCREAMING_SNAKE_CASE name clients can
//! branch on, an integer for logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable error identifiers. The string and integer forms are part of the
/// wire contract; add new variants rather than renumbering existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    /// Malformed request data, e.g. a non-numeric id in the path
    BadRequest,
    JsonExtraction,
    NotFound,
    MethodNotAllowed,

    // Server errors
    InternalError,
    ServiceUnavailable,

    // Migration errors (3000s)
    MigrationError,

    // I/O errors (4000s)
    IoError,

    // Serialization errors (5000s)
    SerdeJsonError,
}

impl ErrorCode {
    /// The name clients see in the `error` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::MigrationError => "MIGRATION_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// The numeric form used in structured logs and metrics. Grouped by
    /// range: 1000s HTTP, 3000s migrations, 4000s I/O, 5000s serialization.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::BadRequest => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1011,
            Self::MethodNotAllowed => 1012,
            Self::MigrationError => 3001,
            Self::IoError => 4001,
            Self::SerdeJsonError => 5001,
        }
    }

    /// Fallback message when a handler has nothing more specific to say.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::BadRequest => "Malformed request",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "Method not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::MigrationError => "Migration error",
            Self::IoError => "I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Clients and dashboards key off these values; renumbering is a
    // breaking change even when the enum still compiles.
    #[test]
    fn wire_mappings_stay_stable() {
        let expected = [
            (ErrorCode::ValidationError, "VALIDATION_ERROR", 1001),
            (ErrorCode::BadRequest, "BAD_REQUEST", 1002),
            (ErrorCode::JsonExtraction, "JSON_EXTRACTION", 1003),
            (ErrorCode::NotFound, "NOT_FOUND", 1004),
            (ErrorCode::InternalError, "INTERNAL_ERROR", 1005),
            (ErrorCode::ServiceUnavailable, "SERVICE_UNAVAILABLE", 1011),
            (ErrorCode::MethodNotAllowed, "METHOD_NOT_ALLOWED", 1012),
            (ErrorCode::MigrationError, "MIGRATION_ERROR", 3001),
            (ErrorCode::IoError, "IO_ERROR", 4001),
            (ErrorCode::SerdeJsonError, "SERDE_JSON_ERROR", 5001),
        ];

        for (code, name, number) in expected {
            assert_eq!(code.as_str(), name);
            assert_eq!(code.code(), number);
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn default_messages_are_human_readable() {
        assert_eq!(
            ErrorCode::ValidationError.default_message(),
            "Request validation failed"
        );
        assert_eq!(ErrorCode::NotFound.default_message(), "Resource not found");
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ValidationError).unwrap();
        assert_eq!(json, "\"VALIDATION_ERROR\"");

        let code: ErrorCode = serde_json::from_str("\"NOT_FOUND\"").unwrap();
        assert_eq!(code, ErrorCode::NotFound);
    }
}
