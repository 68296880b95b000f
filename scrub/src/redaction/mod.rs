//! Redaction policy and traversal.
//!
//! - **`policy`**: how a sensitive scalar is rewritten (`ScalarRedactionPolicy`)
//! - **`walk`**: which scalars are sensitive, decided per key while walking a
//!   document (`Redactor`)
//!
//! Field selection lives in `crate::fields`.

mod policy;
mod walk;

pub use policy::{ScalarRedactionPolicy, BOOLEAN_MARKER, DEFAULT_MASK_CHAR};
pub use walk::{RedactionReport, Redactor};
