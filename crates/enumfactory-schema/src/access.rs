//! Validity and safe access over synthesized enumerations.
//!
//! Pure lookups; a miss is `None`, never an error.

use crate::node::{Enumeration, MetadataTable};

/// True iff `value` is the assigned value of a declared member.
#[must_use]
pub fn is_valid(owner: &Enumeration, value: i64) -> bool {
    owner.labels().get(value).is_some()
}

/// Read `table` at `value`, bounded by the owner's `total`.
#[must_use]
pub fn safe_get<'a, T>(
    table: &'a MetadataTable<T>,
    owner: &Enumeration,
    value: i64,
) -> Option<&'a T> {
    debug_assert_eq!(table.owner(), owner.name(), "table consulted with a foreign owner");

    let index = usize::try_from(value).ok()?;
    if index >= owner.total() {
        return None;
    }

    table.get(value)
}

#[must_use]
pub fn to_label(owner: &Enumeration, value: i64) -> Option<&str> {
    safe_get(owner.labels(), owner, value).map(String::as_str)
}

///
/// TESTS
///
