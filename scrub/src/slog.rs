//! Adapters for emitting redacted documents through `slog`.
//!
//! This module connects [`Redactor`] with `slog` by providing a `slog::Value`
//! that serializes the redacted form of a document as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is produced by the redactor, never
//!   from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::Redactor;

/// Placeholder logged when a value cannot be converted into a document.
pub const SERIALIZE_FAILURE_PLACEHOLDER: &str = "Failed to serialize redacted value";

/// A `slog::Value` that emits an already-redacted document as structured JSON.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The redacted document that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl Redactor {
    /// Redacts `document` and wraps it for logging.
    ///
    /// ```ignore
    /// info!(logger, "received"; "payload" => redactor.loggable(payload));
    /// ```
    pub fn loggable(&self, document: JsonValue) -> RedactedJson {
        RedactedJson::new(self.redact(document))
    }

    /// Serializes `value`, redacts the result and wraps it for logging.
    ///
    /// If `value` cannot be converted into a document, the logged value is the
    /// string [`SERIALIZE_FAILURE_PLACEHOLDER`].
    pub fn loggable_serialize<T>(&self, value: &T) -> RedactedJson
    where
        T: Serialize + ?Sized,
    {
        let value = self.redact_serialize(value).unwrap_or_else(|_| {
            JsonValue::String(SERIALIZE_FAILURE_PLACEHOLDER.to_string())
        });
        RedactedJson::new(value)
    }
}
