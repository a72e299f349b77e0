//! REST API definitions.

pub mod assignment;
pub mod calendar;
pub mod season;

use serde::Serialize;

use crate::define_error;

pub use self::calendar::Multipliers;

/// Envelope wrapping every API response.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    /// Indicator whether the request succeeded.
    pub success: bool,

    /// Payload of a successful response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable description of a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable message accompanying a successful response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Creates a new successful [`Envelope`] with the provided payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Creates a new successful [`Envelope`] with the provided payload and
    /// message.
    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }
}

impl Envelope {
    /// Creates a new failure [`Envelope`] with the provided description.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

define_error! {
    enum ValidationError {
        #[code = "INVALID_YEAR"]
        #[status = BAD_REQUEST]
        #[message = "Invalid year"]
        Year,

        #[code = "INVALID_MONTH"]
        #[status = BAD_REQUEST]
        #[message = "Invalid month"]
        Month,
    }
}

#[cfg(test)]
mod spec {
    use super::Envelope;

    #[test]
    fn ok_skips_failure_fields() {
        let json = serde_json::to_value(Envelope::ok(42)).unwrap();

        assert_eq!(json, serde_json::json!({"success": true, "data": 42}));
    }

    #[test]
    fn ok_with_message_keeps_message() {
        let json = serde_json::to_value(Envelope::ok_with_message(
            42,
            "Season updated successfully",
        ))
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "data": 42,
                "message": "Season updated successfully",
            }),
        );
    }

    #[test]
    fn failure_skips_payload_fields() {
        let json = serde_json::to_value(Envelope::failure("Invalid year"))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Invalid year"}),
        );
    }
}
