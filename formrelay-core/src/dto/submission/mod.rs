//! Submission result DTO

use serde::{Deserialize, Serialize};

/// JSON body returned by every submission endpoint.
///
/// `{"ok": true}` on full success, `{"ok": false, "error": "..."}` otherwise,
/// always paired with an HTTP status for the failure class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_without_error_key() {
        let json = serde_json::to_string(&SubmissionResult::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn test_error_round_trip() {
        let json = serde_json::to_string(&SubmissionResult::error("Method not allowed")).unwrap();
        assert_eq!(json, r#"{"ok":false,"error":"Method not allowed"}"#);

        let parsed: SubmissionResult = serde_json::from_str(&json).unwrap();
        assert!(!parsed.ok);
        assert_eq!(parsed.error.as_deref(), Some("Method not allowed"));
    }

    #[test]
    fn test_missing_error_field_tolerated() {
        let parsed: SubmissionResult = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert!(!parsed.ok);
        assert!(parsed.error.is_none());
    }
}
