use log::{error, info};
use serde::{Deserialize, Serialize};

use super::{parse_body, FunctionResponse};
use crate::classification::{classify_exam_type, lexicon, Lexicon};
use crate::error::{RadclassError, Result};
use crate::types::ExamType;

const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";
const NO_QUERY_MESSAGE: &str = "No query provided in request body";

/// Request body: `{"text": "..."}`
#[derive(Debug, Deserialize)]
struct ExamTypeRequest {
    text: Option<String>,
}

/// Response body: `{"response": "<label>"}`
#[derive(Debug, Serialize)]
struct ExamTypeResponse {
    response: ExamType,
}

/// Handles an exam-type detection request
///
/// The text is not trimmed: only an absent or empty `text` is rejected.
pub fn handle(body: &[u8]) -> FunctionResponse {
    handle_with(lexicon(), body)
}

/// Handles a request against an explicit lexicon lookup result
pub fn handle_with(lexicon: Result<&Lexicon>, body: &[u8]) -> FunctionResponse {
    info!("Processing get_exam_type request");

    match run(lexicon, body) {
        Ok(exam_type) => {
            info!("Detected exam type: {}", exam_type);
            FunctionResponse::json(200, &ExamTypeResponse { response: exam_type })
        }
        Err(e) => {
            error!("Error processing request: {}", e);
            match e {
                RadclassError::InvalidBody(_) => {
                    FunctionResponse::error(400, INVALID_JSON_MESSAGE)
                }
                RadclassError::MissingField(_) => FunctionResponse::error(400, NO_QUERY_MESSAGE),
                other => FunctionResponse::error(other.status_code(), other.to_string()),
            }
        }
    }
}

fn run(lexicon: Result<&Lexicon>, body: &[u8]) -> Result<ExamType> {
    let request: ExamTypeRequest = parse_body(body)?;

    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RadclassError::MissingField("text".to_string()))?;

    Ok(classify_exam_type(lexicon?, &text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    fn body_json(resp: &FunctionResponse) -> Value {
        serde_json::from_str(&resp.body).unwrap()
    }

    #[rstest]
    #[case("IRM du genou", "IRM")]
    #[case("mammographie bilatérale", "Mammographie")]
    #[case("consultation de suivi", "AUTRE")]
    #[case("Radiographie du bassin", "RADIO")]
    #[case("Coroscanner", "SCANNER")]
    #[case("Doppler veineux", "ECHOGRAPHIE")]
    fn test_detects_exam_type(#[case] text: &str, #[case] expected: &str) {
        let body = serde_json::json!({ "text": text }).to_string();
        let resp = handle(body.as_bytes());
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.mimetype, "application/json");
        assert_eq!(body_json(&resp), serde_json::json!({ "response": expected }));
    }

    #[rstest]
    #[case(r#"{"text": ""}"#)]
    #[case(r#"{"text": null}"#)]
    #[case(r#"{}"#)]
    fn test_no_query(#[case] body: &str) {
        let resp = handle(body.as_bytes());
        assert_eq!(resp.status_code, 400);
        assert_eq!(body_json(&resp)["error"], "No query provided in request body");
    }

    #[test]
    fn test_whitespace_text_is_processed() {
        let resp = handle(br#"{"text": "   "}"#);
        assert_eq!(resp.status_code, 200);
        assert_eq!(body_json(&resp)["response"], "AUTRE");
    }

    #[rstest]
    #[case("{text: IRM}")]
    #[case(r#"["IRM"]"#)]
    #[case(r#"{"text": 12}"#)]
    #[case("")]
    fn test_invalid_json(#[case] body: &str) {
        let resp = handle(body.as_bytes());
        assert_eq!(resp.status_code, 400);
        assert_eq!(body_json(&resp)["error"], "Invalid JSON format");
    }

    #[test]
    fn test_internal_failure() {
        let resp = handle_with(
            Err(RadclassError::PatternError("bad pattern".to_string())),
            br#"{"text": "IRM"}"#,
        );
        assert_eq!(resp.status_code, 500);
        assert_eq!(body_json(&resp)["error"], "Pattern error: bad pattern");
    }
}
