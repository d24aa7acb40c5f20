//! Stateless validation predicates shared by entity factories.
//!
//! # Responsibility
//! - Provide the field-level checks every factory runs before construction.
//! - Generate stable string identifiers for entities keyed by text.
//!
//! # Invariants
//! - Every predicate is total and side-effect free.
//! - Predicates are phrased the way factories consume them: `true` on the
//!   "valid" side for `is_valid_email`, `true` on the "reject" side otherwise.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Returns `true` when `value` cannot be used as an entity identifier.
///
/// Identifiers and counts in this domain are strictly positive.
pub fn is_int_not_valid(value: i64) -> bool {
    value <= 0
}

/// Returns `true` when `value` is absent, empty, or whitespace only.
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}

/// Returns `true` when `value` is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `true` when `value` looks like `local@domain.tld`.
///
/// The domain must contain at least one dot and end in an alphabetic label
/// of two or more characters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Generates a fresh random identifier for text-keyed entities.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
