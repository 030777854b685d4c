use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product at index {index} has no '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("product at index {index} has a non-string '{field}' (found {found})")]
    InvalidField {
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("record at index {index} is not an object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("first result is not an object (found {found})")]
    UnexpectedItem { found: &'static str },

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
