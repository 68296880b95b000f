//! Field-name driven redaction for JSON documents.
//!
//! This crate separates:
//! - **Field selection**: which keys are sensitive ([`SensitiveFieldSet`]).
//! - **Policy**: how a sensitive scalar is rewritten ([`ScalarRedactionPolicy`]).
//! - **Traversal**: walking a document and applying the policy to every scalar
//!   whose immediately enclosing key is sensitive ([`Redactor`]).
//!
//! Key rules:
//! - Matching is by exact, case-sensitive key name. Paths are not considered.
//! - Object values are judged by their own key; array elements inherit the key
//!   of the array that holds them.
//! - Sensitive booleans become a fixed marker (`"-"`). Every other sensitive
//!   scalar is stringified and has its ASCII letters and digits masked with `*`.
//! - The shape of the document never changes: same keys, same order, same
//!   array lengths.
//!
//! ```rust
//! use scrub::{Redactor, SensitiveFieldSet};
//! use serde_json::json;
//!
//! let fields = SensitiveFieldSet::build(["name", "email"]);
//! let redacted = Redactor::new(fields).redact(json!({
//!     "name": { "first": "Kelly", "last": "Doe" },
//!     "email": "kdoe@example.com",
//!     "id": 12324
//! }));
//!
//! assert_eq!(
//!     redacted,
//!     json!({
//!         "name": { "first": "*****", "last": "***" },
//!         "email": "****@*******.***",
//!         "id": 12324
//!     })
//! );
//! ```
//!
//! What this crate does not do:
//! - detect PII by content
//! - validate document schemas
//! - stream documents
//!
//! The [`files`] module holds the loading and rendering helpers used by the
//! `scrub` command-line shell.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
mod fields;
pub mod files;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::{Result, ScrubError};
pub use fields::{SensitiveFieldSet, DERIVED_NAME_FIELDS, NAME_FIELD};
pub use redaction::{
    RedactionReport, Redactor, ScalarRedactionPolicy, BOOLEAN_MARKER, DEFAULT_MASK_CHAR,
};

/// The parsed tree form of a JSON document.
///
/// Objects keep their insertion order (`serde_json` is built with
/// `preserve_order`), so redaction never reorders keys.
pub type Document = serde_json::Value;
