//! The set of key names whose values must be redacted.
//!
//! Matching is literal and case-sensitive. A set that contains [`NAME_FIELD`]
//! also treats [`DERIVED_NAME_FIELDS`] as sensitive, so structured names
//! (`{"name": {"first": .., "last": ..}}`) are covered by listing `name` alone.

use std::collections::BTreeSet;

/// Key that triggers the derived name expansion.
pub const NAME_FIELD: &str = "name";

/// Keys added to the set when [`NAME_FIELD`] is present.
pub const DERIVED_NAME_FIELDS: [&str; 2] = ["first", "last"];

/// Immutable set of sensitive key names.
///
/// Built once with [`SensitiveFieldSet::build`]; there is no way to add or
/// remove names afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SensitiveFieldSet {
    fields: BTreeSet<String>,
}

impl SensitiveFieldSet {
    /// Builds the set from raw field names.
    ///
    /// Duplicates collapse and empty names are ignored. If the input contains
    /// `"name"`, `"first"` and `"last"` are added as well. The expansion runs
    /// once, here.
    #[must_use]
    pub fn build<I, S>(raw_field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: BTreeSet<String> = raw_field_names
            .into_iter()
            .map(Into::into)
            .filter(|field| !field.is_empty())
            .collect();

        if fields.contains(NAME_FIELD) {
            fields.extend(DERIVED_NAME_FIELDS.map(String::from));
        }

        Self { fields }
    }

    /// Returns `true` if `field` is sensitive.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the sensitive names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for SensitiveFieldSet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}
