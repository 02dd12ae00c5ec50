//! Generation-time checks shared by the synthesizer and the table builder.

pub mod naming;

use crate::{error::SchemaError, node::AssignedMember, types::DuplicateValuePolicy};
use std::collections::{BTreeMap, HashSet};

/// Reject repeated names in one member list.
pub(crate) fn check_unique_names<'a>(
    enum_name: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateName {
                enum_name: enum_name.to_string(),
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Apply the duplicate value policy to assigned members.
pub(crate) fn check_duplicate_values(
    enum_name: &str,
    members: &[AssignedMember],
    policy: DuplicateValuePolicy,
) -> Result<(), SchemaError> {
    if policy == DuplicateValuePolicy::LastWriteWins {
        return Ok(());
    }

    let mut by_value: BTreeMap<i64, &str> = BTreeMap::new();
    for member in members {
        if let Some(first) = by_value.insert(member.value, &member.name) {
            return Err(SchemaError::DuplicateValue {
                enum_name: enum_name.to_string(),
                value: member.value,
                first: first.to_string(),
                second: member.name.clone(),
            });
        }
    }

    Ok(())
}
