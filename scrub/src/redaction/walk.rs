//! Document traversal.
//!
//! The walker visits every node once with an explicit stack, so arbitrarily
//! deep documents cannot exhaust the call stack. Each node is paired with the
//! key that owns it:
//!
//! | Node | Owner passed to children |
//! |------|--------------------------|
//! | Object | each value is owned by its own key |
//! | Array | every element is owned by the array's key |
//! | Scalar | redacted if its owner is sensitive |
//!
//! The root has no owner and is never redacted.

use std::mem;

use serde::Serialize;
use serde_json::Value;

use super::policy::ScalarRedactionPolicy;
use crate::fields::SensitiveFieldSet;

/// Counters collected during one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedactionReport {
    /// Nodes visited, containers included.
    pub nodes_visited: usize,
    /// Scalars rewritten by the policy.
    pub scalars_redacted: usize,
    /// Deepest nesting level seen; the root is depth 0.
    pub max_depth: usize,
}

/// Walks documents and redacts scalars owned by sensitive keys.
///
/// A `Redactor` holds no per-document state and can be shared between threads
/// to process independent documents concurrently.
#[derive(Clone, Debug, Default)]
pub struct Redactor {
    fields: SensitiveFieldSet,
    policy: ScalarRedactionPolicy,
}

impl Redactor {
    /// Creates a redactor with the default [`ScalarRedactionPolicy`].
    #[must_use]
    pub fn new(fields: SensitiveFieldSet) -> Self {
        Self {
            fields,
            policy: ScalarRedactionPolicy::default(),
        }
    }

    /// Replaces the scalar policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ScalarRedactionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn fields(&self) -> &SensitiveFieldSet {
        &self.fields
    }

    pub fn policy(&self) -> &ScalarRedactionPolicy {
        &self.policy
    }

    /// Redacts a whole document. Equivalent to `transform(None, document)`.
    #[must_use]
    pub fn redact(&self, document: Value) -> Value {
        self.transform(None, document)
    }

    /// Redacts `value` as if it were found under the key `field`.
    ///
    /// With `field = None` the value is treated as a root: a scalar root is
    /// returned unchanged. With a sensitive `field`, a scalar is redacted and
    /// every element of an array is redacted under that same key.
    #[must_use]
    pub fn transform(&self, field: Option<&str>, mut value: Value) -> Value {
        self.walk(field, &mut value);
        value
    }

    /// Redacts a document without reallocating its containers.
    pub fn redact_in_place(&self, document: &mut Value) {
        self.walk(None, document);
    }

    /// Redacts a document and reports what the traversal did.
    #[must_use]
    pub fn redact_with_report(&self, mut document: Value) -> (Value, RedactionReport) {
        let report = self.walk(None, &mut document);
        (document, report)
    }

    /// Redacts any serializable value by converting it into a document first.
    pub fn redact_serialize<T>(&self, value: &T) -> serde_json::Result<Value>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map(|document| self.redact(document))
    }

    /// Applies the policy to a scalar owned by `field`.
    ///
    /// Values whose owner is absent or not sensitive are returned as-is, with
    /// their original type.
    #[must_use]
    pub fn redact_scalar(&self, field: Option<&str>, value: Value) -> Value {
        if self.is_sensitive(field) {
            self.policy.apply_to(value)
        } else {
            value
        }
    }

    fn is_sensitive(&self, field: Option<&str>) -> bool {
        field.is_some_and(|field| self.fields.contains(field))
    }

    fn walk(&self, field: Option<&str>, root: &mut Value) -> RedactionReport {
        let mut report = RedactionReport::default();
        let mut pending: Vec<(Option<&str>, usize, &mut Value)> = vec![(field, 0, root)];

        while let Some((owner, depth, node)) = pending.pop() {
            report.nodes_visited += 1;
            report.max_depth = report.max_depth.max(depth);

            match node {
                Value::Array(items) => {
                    // Reversed so elements are visited in document order.
                    pending.extend(items.iter_mut().rev().map(|item| (owner, depth + 1, item)));
                }
                Value::Object(entries) => {
                    let children: Vec<_> = entries
                        .iter_mut()
                        .map(|(key, value)| (Some(key.as_str()), depth + 1, value))
                        .collect();
                    pending.extend(children.into_iter().rev());
                }
                scalar => {
                    if self.is_sensitive(owner) {
                        *scalar = self.policy.apply_to(mem::take(scalar));
                        report.scalars_redacted += 1;
                    }
                }
            }
        }

        report
    }
}
