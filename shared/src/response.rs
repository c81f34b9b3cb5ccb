//! API Response types
//!
//! Response envelopes for the cafe API. The shapes are fixed by existing
//! clients of the service:
//!
//! ```json
//! { "cafe": { ... } }
//! { "cafes": [ ... ] }
//! { "success": "Successfully updated the price." }
//! { "response": { "success": "Successfully added the new cafe." } }
//! { "error": "Sorry, that's not allowed. ..." }
//! { "error": { "Not Found": "Sorry a cafe with that id was not found in the database." } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Cafe;

/// Single cafe envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeResponse {
    pub cafe: Cafe,
}

/// Cafe list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeListResponse {
    pub cafes: Vec<Cafe>,
}

/// Flat success message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
        }
    }
}

/// Success message nested under `response` (returned by the add endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSuccessResponse {
    pub response: SuccessResponse,
}

impl NestedSuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: SuccessResponse::new(message),
        }
    }
}

/// Error payload
///
/// Either a plain message or a single `{label: message}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Labeled(BTreeMap<String, String>),
}

/// Error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    /// `{"error": "<message>"}`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail::Message(message.into()),
        }
    }

    /// `{"error": {"<label>": "<message>"}}`
    pub fn labeled(label: impl Into<String>, message: impl Into<String>) -> Self {
        let mut detail = BTreeMap::new();
        detail.insert(label.into(), message.into());
        Self {
            error: ErrorDetail::Labeled(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_cafe() -> Cafe {
        Cafe {
            id: 7,
            name: "Science Gallery London".to_string(),
            map_url: "https://g.page/scigallerylon".to_string(),
            img_url: "https://example.com/sgl.jpg".to_string(),
            location: "London Bridge".to_string(),
            seats: "50+".to_string(),
            has_toilet: Some(true),
            has_wifi: Some(false),
            has_sockets: Some(true),
            can_take_calls: None,
            coffee_price: None,
        }
    }

    #[test]
    fn test_cafe_envelope_shape() {
        let value = serde_json::to_value(CafeResponse {
            cafe: sample_cafe(),
        })
        .unwrap();

        assert_eq!(value["cafe"]["id"], 7);
        assert_eq!(value["cafe"]["location"], "London Bridge");
        assert_eq!(value["cafe"]["has_wifi"], false);
        assert_eq!(value["cafe"]["can_take_calls"], serde_json::Value::Null);
        assert_eq!(value["cafe"]["coffee_price"], serde_json::Value::Null);
        assert_eq!(value["cafe"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_empty_list_envelope() {
        let value = serde_json::to_value(CafeListResponse { cafes: vec![] }).unwrap();
        assert_eq!(value, json!({ "cafes": [] }));
    }

    #[test]
    fn test_success_shapes() {
        assert_eq!(
            serde_json::to_value(SuccessResponse::new("done")).unwrap(),
            json!({ "success": "done" })
        );
        assert_eq!(
            serde_json::to_value(NestedSuccessResponse::new("added")).unwrap(),
            json!({ "response": { "success": "added" } })
        );
    }

    #[test]
    fn test_error_shapes() {
        let plain = ErrorResponse::message("nope");
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!({ "error": "nope" }));

        let labeled = ErrorResponse::labeled("Not Found", "missing");
        assert_eq!(
            serde_json::to_value(&labeled).unwrap(),
            json!({ "error": { "Not Found": "missing" } })
        );
    }

    #[test]
    fn test_error_response_parses_both_shapes() {
        let plain: ErrorResponse = serde_json::from_value(json!({ "error": "x" })).unwrap();
        assert_eq!(plain, ErrorResponse::message("x"));

        let labeled: ErrorResponse =
            serde_json::from_value(json!({ "error": { "Not Found": "y" } })).unwrap();
        assert_eq!(labeled, ErrorResponse::labeled("Not Found", "y"));
    }
}
