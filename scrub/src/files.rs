//! Loading inputs from disk and rendering the redacted output.
//!
//! These helpers back the `scrub` command-line shell. Empty, unreadable and
//! malformed inputs are reported here; the redaction core itself cannot fail.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use serde_json::Value;

use crate::{
    error::{Result, ScrubError},
    fields::SensitiveFieldSet,
};

/// Path that selects standard output in [`write_document`].
pub const STDOUT_PATH: &str = "-";

/// Output formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Two-space indentation, one value per line.
    #[default]
    Pretty,
    /// Single line without whitespace.
    Compact,
}

/// Splits a field list into names.
///
/// Entries are separated by newlines or commas. Surrounding whitespace
/// (including `\r` from CRLF files) is trimmed and blank entries are dropped.
pub fn parse_field_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a field list file and builds the sensitive set from it.
pub fn load_field_set(path: &Path) -> Result<SensitiveFieldSet> {
    let text = read_non_empty(path)?;
    Ok(SensitiveFieldSet::build(parse_field_list(&text)))
}

/// Reads and parses a JSON document, keeping key order.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = read_non_empty(path)?;
    serde_json::from_str(&text).map_err(|source| ScrubError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a document. Pretty output ends with a newline.
pub fn render_document(document: &Value, style: OutputStyle) -> Result<String> {
    let mut rendered = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(document),
        OutputStyle::Compact => serde_json::to_string(document),
    }
    .map_err(ScrubError::Serialize)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Renders `document` and writes it to `path`, or to stdout for `-`.
///
/// The document is fully rendered before anything is written.
pub fn write_document(path: &Path, document: &Value, style: OutputStyle) -> Result<()> {
    let rendered = render_document(document, style)?;
    let write_err = |source: io::Error| ScrubError::Write {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new(STDOUT_PATH) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes()).map_err(write_err)?;
        stdout.flush().map_err(write_err)
    } else {
        fs::write(path, rendered).map_err(write_err)
    }
}

fn read_non_empty(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| ScrubError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(ScrubError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}
