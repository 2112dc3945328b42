//! HTTP-triggered function handlers
//!
//! Each handler takes the raw request body and returns a [`FunctionResponse`]
//! carrying the status code and JSON body the host should send back. The
//! transport itself stays with the host.

pub mod cr_processing;
pub mod get_exam_type;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::{RadclassError, Result};

/// Content type of every response body
pub const JSON_MIMETYPE: &str = "application/json";

/// Error body used if a response cannot be serialized
const FALLBACK_ERROR_BODY: &str = r#"{"error": "Response serialization failed"}"#;

/// Function names a host can dispatch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    /// Title normalization and interventional detection
    CrProcessing,
    /// Exam-type detection
    GetExamType,
}

impl FunctionName {
    pub fn simple_name(&self) -> &'static str {
        match self {
            FunctionName::CrProcessing => "cr_processing",
            FunctionName::GetExamType => "get_exam_type",
        }
    }

    /// Runs the handler for this function
    pub fn handle(&self, body: &[u8]) -> FunctionResponse {
        match self {
            FunctionName::CrProcessing => cr_processing::handle(body),
            FunctionName::GetExamType => get_exam_type::handle(body),
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Response produced by a function handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResponse {
    pub status_code: u16,
    pub mimetype: &'static str,
    pub body: String,
}

impl FunctionResponse {
    /// Serializes `payload` as a JSON response with the given status
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code,
                mimetype: JSON_MIMETYPE,
                body,
            },
            Err(e) => {
                log::error!("Failed to serialize response: {}", e);
                Self {
                    status_code: 500,
                    mimetype: JSON_MIMETYPE,
                    body: FALLBACK_ERROR_BODY.to_string(),
                }
            }
        }
    }

    /// JSON `{"error": message}` response
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self::json(
            status_code,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// `{"error": ...}` payload shared by both functions
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Decodes a request body that must be a JSON object
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RadclassError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(RadclassError::InvalidBody(
            "request body is not a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| RadclassError::InvalidBody(e.to_string()))
}

/// Returns at most `max_chars` characters of `text`, for log previews
pub(crate) fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let resp = FunctionResponse::error(400, "bad");
        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.mimetype, "application/json");
        assert_eq!(resp.body, r#"{"error":"bad"}"#);
        assert!(!resp.is_success());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("éèà", 2), "éè");
        assert_eq!(preview("abc", 50), "abc");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_parse_body_requires_object() {
        #[derive(Debug, serde::Deserialize)]
        struct Req {
            #[allow(dead_code)]
            a: Option<String>,
        }

        assert!(parse_body::<Req>(br#"{"a": "x"}"#).is_ok());
        assert!(matches!(
            parse_body::<Req>(br#"["x"]"#),
            Err(RadclassError::InvalidBody(_))
        ));
        assert!(parse_body::<Req>(b"").is_err());
    }

    #[test]
    fn test_dispatch_by_name() {
        let resp = FunctionName::GetExamType.handle(br#"{"text": "IRM du genou"}"#);
        assert!(resp.is_success());
        assert_eq!(FunctionName::CrProcessing.to_string(), "cr_processing");
    }
}
