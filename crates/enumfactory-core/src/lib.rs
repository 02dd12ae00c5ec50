//! Runtime artifacts consumed by generated enumerations and tables.
//!
//! Everything here is read-only data plus pure lookups; generated code holds
//! its tables in `const` items so any number of threads can read them
//! without coordination.

mod member;
mod table;
mod traits;

pub use member::{Member, find_slot, find_value};
pub use table::MetaTable;
pub use traits::{EnumKind, TableKind};

/// Whether `value` is a declared member of `E`.
#[must_use]
pub fn is_valid<E: EnumKind>(value: i64) -> bool {
    E::is_valid(value)
}

/// Bounds-checked read from the generated table `T`.
#[must_use]
pub fn safe_get<T: TableKind>(value: i64) -> Option<&'static T::Value> {
    T::get(value)
}

/// Label of the member assigned `value`, if any.
#[must_use]
pub fn to_label<E: EnumKind>(value: i64) -> Option<&'static str> {
    E::to_label(value)
}

///
/// TESTS
///
