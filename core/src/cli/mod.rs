pub mod report;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::{ExamTypeDetector, ReportProcessor};
use crate::error::{RadclassError, Result};
use crate::functions::FunctionName;
use crate::types::ExamType;
use report::TextReport;

/// Command-line arguments for radclass
#[derive(Parser, Debug)]
#[command(name = "radclass")]
#[command(about = "French radiology report classification tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand the exam title and detect interventional radiology
    ProcessCr {
        /// Report body (compte-rendu)
        #[arg(long)]
        cr: String,

        /// Exam title
        #[arg(long)]
        titre: String,
    },

    /// Classify an exam title into a modality
    ExamType {
        /// Exam title
        #[arg(value_name = "TITLE")]
        text: String,
    },

    /// Print an exam title with abbreviations expanded
    Normalize {
        /// Exam title
        #[arg(value_name = "TITLE")]
        text: String,
    },

    /// Run a function handler on a JSON request body
    Invoke {
        /// Function to run
        #[arg(value_name = "FUNCTION")]
        function: FunctionArg,

        /// File holding the request body (stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        body: Option<PathBuf>,
    },
}

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Function names accepted by `invoke`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FunctionArg {
    /// Title expansion and interventional detection
    CrProcessing,
    /// Exam-type detection
    GetExamType,
}

impl From<FunctionArg> for FunctionName {
    fn from(arg: FunctionArg) -> Self {
        match arg {
            FunctionArg::CrProcessing => FunctionName::CrProcessing,
            FunctionArg::GetExamType => FunctionName::GetExamType,
        }
    }
}

/// What a command prints and whether it succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            success: true,
        }
    }
}

/// Runs a subcommand and renders its output
///
/// # Errors
///
/// Returns an error if the request body cannot be read, an argument is
/// blank, or the keyword tables are unavailable. A function handler's own
/// 4xx/5xx answer is not an error: it is printed with `success == false`.
pub fn execute(command: &Command, format: &OutputFormat) -> Result<CommandOutput> {
    match command {
        Command::ProcessCr { cr, titre } => {
            let cr = non_blank(cr, "cr")?;
            let titre = non_blank(titre, "titre")?;
            let report = ReportProcessor::process(cr, titre)?;
            debug!("Processed report: {:?}", report);

            let stdout = match format {
                OutputFormat::Text => TextReport::new(&report).to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            };
            Ok(CommandOutput::ok(stdout))
        }
        Command::ExamType { text } => {
            let exam_type = ExamTypeDetector::detect(text)?;
            info!("Exam type: {}", exam_type);

            #[derive(Serialize)]
            struct ExamTypeJson {
                response: ExamType,
            }

            let stdout = match format {
                OutputFormat::Text => exam_type.label().to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&ExamTypeJson {
                    response: exam_type,
                })?,
            };
            Ok(CommandOutput::ok(stdout))
        }
        Command::Normalize { text } => {
            let normalized = ExamTypeDetector::normalize(text)?;

            #[derive(Serialize)]
            struct NormalizedJson<'a> {
                input: &'a str,
                normalized: String,
            }

            let stdout = match format {
                OutputFormat::Text => normalized,
                OutputFormat::Json => serde_json::to_string_pretty(&NormalizedJson {
                    input: text,
                    normalized,
                })?,
            };
            Ok(CommandOutput::ok(stdout))
        }
        Command::Invoke { function, body } => {
            let function: FunctionName = (*function).into();
            let request = read_body(body.as_deref())?;
            info!("Invoking {} with {} bytes", function, request.len());

            let response = function.handle(&request);
            info!("{} answered {}", function, response.status_code);

            let success = response.is_success();
            Ok(CommandOutput {
                stdout: response.body,
                success,
            })
        }
    }
}

/// Reads a request body from `path`, or from stdin when `None`
pub fn read_body(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => Ok(fs::read(p)?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn non_blank<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RadclassError::MissingField(name.to_string()));
    }
    Ok(trimmed)
}
