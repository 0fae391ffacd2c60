//! Required-field validation for request types.
//!
//! Every violation is collected before reporting, so a request missing three
//! identifiers yields one error naming all three.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

const BLANK: &str = "cannot be blank";

/// Implemented by every request type. Runs before any network call.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for () {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Aggregate of field violations, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    /// Names of the offending fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}.", rendered)
    }
}

impl std::error::Error for ValidationErrors {}

/// Zero-value check used by [`Validator::required`].
pub(crate) trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for i64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        self.is_null()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Builder collecting required-field violations.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn required<T: Blank + ?Sized>(mut self, field: &'static str, value: &T) -> Self {
        if value.is_blank() {
            self.errors.fields.insert(field, BLANK);
        }
        self
    }

    /// Config-scoped resources need both identifiers.
    pub(crate) fn config(self, config_id: i64, version: i64) -> Self {
        self.required("config_id", &config_id)
            .required("version", &version)
    }

    /// Policy-scoped resources also need the security policy.
    pub(crate) fn policy(self, config_id: i64, version: i64, security_policy_id: &str) -> Self {
        self.config(config_id, version)
            .required("security_policy_id", security_policy_id)
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
