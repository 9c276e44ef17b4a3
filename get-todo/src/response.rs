//! Response types

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Representation of the Lambda response
///
/// The body is the parsed document itself. It serializes as nested JSON,
/// never as a string holding JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    /// HTTP status code reported to the caller
    pub status_code: u16,
    /// Response payload
    pub body: Value,
}

impl LambdaResponse {
    /// A `200 OK` response carrying `body`
    pub fn ok(body: Value) -> Self {
        LambdaResponse {
            status_code: StatusCode::OK.as_u16(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LambdaResponse;
    use serde_json::{self, json};

    #[test]
    fn serialize_object_body() {
        let resp = LambdaResponse::ok(json!({ "a": 1 }));
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"statusCode":200,"body":{"a":1}}"#
        );
    }

    #[test]
    fn serialize_array_body() {
        let resp = LambdaResponse::ok(json!([]));
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"statusCode":200,"body":[]}"#
        );
    }

    #[test]
    fn string_body_is_not_reencoded() {
        let resp = LambdaResponse::ok(json!("plain"));
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"statusCode":200,"body":"plain"}"#
        );
    }
}
