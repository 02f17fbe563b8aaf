//! JSON response envelope.
//!
//! ```text
//! success: {"status": true,  "message": "Get Product", "data": {...}}
//! delete:  {"status": true,  "message": "Success delete product"}
//! failure: {"status": false, "message": "Product not found: 7"}
//! ```

use serde::Serialize;

/// Envelope wrapping every API answer.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful answer carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful answer without data.
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            status: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failure answer.
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shapes() {
        assert_eq!(
            serde_json::to_value(ApiResponse::ok("Get Report", 5)).unwrap(),
            json!({"status": true, "message": "Get Report", "data": 5})
        );
        assert_eq!(
            serde_json::to_value(ApiResponse::message("API Running")).unwrap(),
            json!({"status": true, "message": "API Running"})
        );
        assert_eq!(
            serde_json::to_value(ApiResponse::error("nope")).unwrap(),
            json!({"status": false, "message": "nope"})
        );
    }
}
