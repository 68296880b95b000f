//! Failures of a scrub run: missing, empty, unreadable or malformed inputs and
//! output that cannot be written. The redaction core has no error paths.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScrubError {
    #[error(
        "Please supply two arguments: a text file with a list of sensitive fields and a JSON file of user data."
    )]
    MissingArguments,

    #[error("Please confirm both files have content. ({} is empty)", path.display())]
    EmptyInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrubError>;

impl ScrubError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArguments => "missing_arguments",
            Self::EmptyInput { .. } => "empty_input",
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
            Self::Write { .. } => "write",
            Self::Serialize(_) => "serialize",
        }
    }
}
