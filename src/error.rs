use std::path::PathBuf;

use thiserror::Error;

/// An index outside `[0, size)` was handed to a strict accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{component}::{operation}: index {index} is out of range for size {size}")]
pub struct OutOfRange {
    pub component: &'static str,
    pub operation: &'static str,
    pub index: usize,
    pub size: usize,
}

impl OutOfRange {
    pub fn new(component: &'static str, operation: &'static str, index: usize, size: usize) -> Self {
        Self {
            component,
            operation,
            index,
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ReportError {
    pub kind: ReportErrorKind,
    pub line: usize,
}

impl ReportError {
    pub fn new(kind: ReportErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportErrorKind {
    #[error("expected `Key: value`, found {0:?}")]
    MalformedLine(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing required key {0}")]
    MissingKey(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Malformed report: {0}")]
    Report(#[from] ReportError),

    #[error("Input closed while waiting for an answer")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
