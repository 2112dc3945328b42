use log::{error, info};
use serde::Deserialize;

use super::{parse_body, preview, FunctionResponse};
use crate::api::{ProcessedReport, ReportProcessor};
use crate::classification::{lexicon, Lexicon};
use crate::error::{RadclassError, Result};

const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";
const MISSING_PARAMS_MESSAGE: &str = "Paramètres 'cr' et 'titre' requis";

/// Characters of `cr`/`titre` echoed to the log
const LOG_PREVIEW_CHARS: usize = 50;

/// Request body: `{"cr": "...", "titre": "..."}`
#[derive(Debug, Deserialize)]
struct CrRequest {
    cr: Option<String>,
    titre: Option<String>,
}

/// Handles a report processing request
///
/// - 200 `{"processed_cr", "processed_title", "is_interventional_cr"}`
/// - 400 on an unreadable body or a missing/blank `cr` or `titre`
/// - 500 if the keyword tables are unavailable
pub fn handle(body: &[u8]) -> FunctionResponse {
    handle_with(lexicon(), body)
}

/// Handles a request against an explicit lexicon lookup result
pub fn handle_with(lexicon: Result<&Lexicon>, body: &[u8]) -> FunctionResponse {
    info!("Processing cr_processing request");

    match run(lexicon, body) {
        Ok(report) => FunctionResponse::json(200, &report),
        Err(e) => {
            error!("cr_processing failed: {}", e);
            match e {
                RadclassError::InvalidBody(_) => {
                    FunctionResponse::error(400, INVALID_JSON_MESSAGE)
                }
                RadclassError::MissingField(_) => {
                    FunctionResponse::error(400, MISSING_PARAMS_MESSAGE)
                }
                other => FunctionResponse::error(
                    other.status_code(),
                    format!("Erreur lors de l'exécution: {}", other),
                ),
            }
        }
    }
}

fn run(lexicon: Result<&Lexicon>, body: &[u8]) -> Result<ProcessedReport> {
    let request: CrRequest = parse_body(body)?;

    let cr = required_field(request.cr.as_deref(), "cr")?;
    let titre = required_field(request.titre.as_deref(), "titre")?;

    info!("cr received: {}", preview(cr, LOG_PREVIEW_CHARS));
    info!("titre received: {}...", preview(titre, LOG_PREVIEW_CHARS));

    Ok(ReportProcessor::process_with(lexicon?, cr, titre))
}

/// Trims a field and rejects it if absent or blank
fn required_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RadclassError::MissingField(name.to_string()))
}
