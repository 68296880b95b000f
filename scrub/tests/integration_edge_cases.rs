//! Edge-case coverage for scalar scrubbing and traversal.
//!
//! These tests focus on character handling (non-ASCII text, punctuation,
//! control characters) and on document shapes that are easy to get wrong:
//! deep nesting, keys that repeat at several levels, and unusual numbers.

use scrub::{Redactor, ScalarRedactionPolicy, SensitiveFieldSet};
use serde_json::{json, Value};

fn redactor(fields: &[&str]) -> Redactor {
    Redactor::new(SensitiveFieldSet::build(fields.iter().copied()))
}

#[test]
fn test_empty_string() {
    let redacted = redactor(&["email"]).redact(json!({ "email": "" }));
    assert_eq!(redacted, json!({ "email": "" }));
}

#[test]
fn test_punctuation_only() {
    let policy = ScalarRedactionPolicy::new();
    assert_eq!(policy.scrub("!@#$%^&*()"), "!@#$%^&*()");
    assert_eq!(policy.scrub("   "), "   ");
}

#[test]
fn test_unicode_emoji() {
    let policy = ScalarRedactionPolicy::new();
    assert_eq!(policy.scrub("secret🔒data"), "******🔒****");
}

#[test]
fn test_unicode_multibyte_letters_are_kept() {
    let policy = ScalarRedactionPolicy::new();
    assert_eq!(policy.scrub("秘密数据"), "秘密数据");
    assert_eq!(policy.scrub("Müller"), "*ü****");
}

#[test]
fn test_non_ascii_digits_are_kept() {
    let policy = ScalarRedactionPolicy::new();
    // Arabic-Indic digits are not ASCII.
    assert_eq!(policy.scrub("٣4"), "٣*");
}

#[test]
fn test_combining_characters() {
    let policy = ScalarRedactionPolicy::new();
    assert_eq!(policy.scrub("cafe\u{0301}"), "****\u{0301}");
}

#[test]
fn test_null_byte_and_newlines() {
    let policy = ScalarRedactionPolicy::new();
    assert_eq!(policy.scrub("ab\0cd\n12"), "**\0**\n**");
}

#[test]
fn test_character_count_is_preserved() {
    let policy = ScalarRedactionPolicy::new();
    let text = "José, 42 - ☎ +1 (555) 010-9999";
    assert_eq!(policy.scrub(text).chars().count(), text.chars().count());
}

#[test]
fn test_very_long_string() {
    let long_string = "x".repeat(100_000);
    let redacted = redactor(&["blob"]).redact(json!({ "blob": long_string }));
    assert_eq!(redacted["blob"], Value::String("*".repeat(100_000)));
}

#[test]
fn test_negative_fractional_and_large_numbers() {
    let redacted = redactor(&["n"]).redact(json!({ "n": [-12, 0, 0.25, u64::MAX] }));
    assert_eq!(
        redacted,
        json!({ "n": ["-**", "*", "*.**", "*".repeat(20)] })
    );
}

#[test]
fn test_same_key_at_several_levels() {
    let redacted = redactor(&["id"]).redact(json!({
        "id": 1,
        "items": [{ "id": 2, "children": [{ "id": 3 }] }]
    }));
    assert_eq!(
        redacted,
        json!({
            "id": "*",
            "items": [{ "id": "*", "children": [{ "id": "*" }] }]
        })
    );
}

#[test]
fn test_sensitive_key_holding_object_without_sensitive_members() {
    // An object under a sensitive key is not redacted as a unit.
    let document = json!({ "email": { "primary": "a@b.co", "verified": true } });
    assert_eq!(redactor(&["email"]).redact(document.clone()), document);
}

#[test]
fn test_nested_arrays_inherit_owner() {
    let redacted = redactor(&["codes"]).redact(json!({ "codes": [[1, [2, [3]]], []] }));
    assert_eq!(redacted, json!({ "codes": [["*", ["*", ["*"]]], []] }));
}

#[test]
fn test_keys_resembling_sensitive_names() {
    let document = json!({ "Name": "A", "name ": "B", "names": ["C"], "first_name": "D" });
    assert_eq!(redactor(&["name"]).redact(document.clone()), document);
}

#[test]
fn test_empty_key_is_never_sensitive() {
    let fields = SensitiveFieldSet::build(["", "email"]);
    let redacted = Redactor::new(fields).redact(json!({ "": "value" }));
    assert_eq!(redacted, json!({ "": "value" }));
}

#[test]
fn test_idempotent_redaction() {
    let redactor = redactor(&["name", "us_citizen"]);
    let document = json!({ "name": "Kelly Doe", "us_citizen": true });
    let once = redactor.redact(document);
    let twice = redactor.redact(once.clone());
    assert_eq!(once, twice);
}
