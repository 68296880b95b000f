//! Redaction policy for scalar values.
//!
//! Policies are pure value transformations. They do not traverse documents or
//! decide which keys are sensitive.

use std::borrow::Cow;

use serde_json::Value;

/// Marker that replaces sensitive booleans.
pub const BOOLEAN_MARKER: &str = "-";

/// Character written over letters and digits by the scrub transform.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Text used when a sensitive `null` is stringified before scrubbing.
const NULL_TEXT: &str = "null";

/// How a sensitive scalar is rewritten.
///
/// - Booleans become a fixed marker, the same for `true` and `false`.
/// - Strings, numbers and `null` are stringified, then every ASCII letter and
///   digit is replaced with the mask character. Punctuation, whitespace and
///   non-ASCII characters are kept, so the value keeps its visible shape
///   (`kdoe@example.com` becomes `****@*******.***`).
///
/// Every redacted value is a JSON string, whatever its original type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarRedactionPolicy {
    mask_char: char,
    boolean_marker: Cow<'static, str>,
}

impl ScalarRedactionPolicy {
    /// Constructs the default policy: `*` masking and the `"-"` boolean marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            boolean_marker: Cow::Borrowed(BOOLEAN_MARKER),
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Uses a custom marker for booleans.
    #[must_use]
    pub fn with_boolean_marker<P>(mut self, marker: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.boolean_marker = marker.into();
        self
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn boolean_marker(&self) -> &str {
        &self.boolean_marker
    }

    /// Replaces every ASCII letter and digit in `text` with the mask character.
    ///
    /// Works on Unicode scalar values in a single pass; the output has the same
    /// number of characters as the input.
    #[must_use]
    pub fn scrub(&self, text: &str) -> String {
        text.chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() {
                    self.mask_char
                } else {
                    ch
                }
            })
            .collect()
    }

    /// Applies the policy to a scalar.
    ///
    /// Arrays and objects are returned unchanged; they are never redaction
    /// units on their own.
    #[must_use]
    pub fn apply_to(&self, value: Value) -> Value {
        match value {
            Value::Bool(_) => Value::String(self.boolean_marker.clone().into_owned()),
            Value::String(text) => Value::String(self.scrub(&text)),
            Value::Number(number) => Value::String(self.scrub(&number.to_string())),
            Value::Null => Value::String(self.scrub(NULL_TEXT)),
            container @ (Value::Array(_) | Value::Object(_)) => container,
        }
    }
}

impl Default for ScalarRedactionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{ScalarRedactionPolicy, BOOLEAN_MARKER};

    #[test]
    fn scrub_masks_letters_and_digits_only() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.scrub("Kelly Doe"), "***** ***");
        assert_eq!(policy.scrub("kdoe@example.com"), "****@*******.***");
        assert_eq!(policy.scrub("(555) 123-4567"), "(***) ***-****");
    }

    #[test]
    fn scrub_keeps_non_ascii_characters() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.scrub("José Ñúñez"), "***é Ñúñ**");
        assert_eq!(policy.scrub("秘密42"), "秘密**");
    }

    #[test]
    fn scrub_of_empty_string_is_empty() {
        assert_eq!(ScalarRedactionPolicy::new().scrub(""), "");
    }

    #[test]
    fn booleans_use_the_marker() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.apply_to(json!(true)), json!(BOOLEAN_MARKER));
        assert_eq!(policy.apply_to(json!(false)), json!(BOOLEAN_MARKER));
    }

    #[test]
    fn numbers_become_masked_strings() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.apply_to(json!(12324)), json!("*****"));
        assert_eq!(policy.apply_to(json!(-3)), json!("-*"));
        assert_eq!(policy.apply_to(json!(1.5)), json!("*.*"));
    }

    #[test]
    fn null_is_stringified_then_masked() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.apply_to(Value::Null), json!("****"));
    }

    #[test]
    fn containers_pass_through() {
        let policy = ScalarRedactionPolicy::new();
        assert_eq!(policy.apply_to(json!(["a"])), json!(["a"]));
        assert_eq!(policy.apply_to(json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn custom_mask_char_and_marker() {
        let policy = ScalarRedactionPolicy::new()
            .with_mask_char('#')
            .with_boolean_marker("[bool]");
        assert_eq!(policy.apply_to(json!("ab-12")), json!("##-##"));
        assert_eq!(policy.apply_to(json!(true)), json!("[bool]"));
        assert_eq!(policy.mask_char(), '#');
        assert_eq!(policy.boolean_marker(), "[bool]");
    }
}
