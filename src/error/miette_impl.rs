//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};

use super::Error;

/// A diagnostic wrapper for reader errors compatible with miette.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct RecordDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(err: &Error) -> Option<String> {
    let text = match err {
        Error::MissingSource => "Build the reader with Reader::new or Reader::from_provider",
        Error::Open { .. } => "Check that the input exists and is readable",
        Error::Io(_) => "The underlying source failed while streaming",
        Error::Step { .. } => "A step returned Flow::fail; the stream ended at this record",
        Error::Pattern(_) => "The field separator must be a valid regular expression",
        Error::Config(_) => "Check the configuration values and their format",
        Error::Utf8(_) => "Use read_all for binary output",
    };
    Some(text.into())
}

impl From<Error> for RecordDiagnostic {
    fn from(e: Error) -> Self {
        let help = help_for(&e);
        let message = match e.record() {
            Some(nr) => format!("processing stopped at record {nr}"),
            None => e.to_string(),
        };
        RecordDiagnostic {
            message,
            source: Some(Box::new(e)),
            help,
            severity: Severity::Error,
        }
    }
}

impl From<Error> for miette::Report {
    fn from(e: Error) -> Self {
        miette::Report::new(RecordDiagnostic::from(e))
    }
}
