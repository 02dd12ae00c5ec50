use crate::{
    MAX_TOTAL,
    prelude::*,
    validate::{check_duplicate_values, check_unique_names, naming::validate_ident},
};
use tracing::{debug, trace};

///
/// SynthConfig
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SynthConfig {
    pub duplicate_values: DuplicateValuePolicy,
    pub max_total: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            duplicate_values: DuplicateValuePolicy::default(),
            max_total: MAX_TOTAL,
        }
    }
}

///
/// EnumDef
///
/// A named member list, as declared.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    pub name: String,

    #[serde(default)]
    pub duplicates: DuplicateValuePolicy,

    pub members: Vec<MemberDecl>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>, members: Vec<MemberDecl>) -> Self {
        Self {
            name: name.into(),
            duplicates: DuplicateValuePolicy::default(),
            members,
        }
    }

    pub fn synthesize(&self) -> Result<Enumeration, SchemaError> {
        let config = SynthConfig {
            duplicate_values: self.duplicates,
            ..SynthConfig::default()
        };

        synthesize_with(&self.name, &self.members, &config)
    }
}

///
/// Enumeration
///
/// The synthesized enumeration: assigned members, `total`, `count` and the
/// automatic label table.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Enumeration {
    name: String,
    members: Vec<AssignedMember>,
    total: usize,
    policy: DuplicateValuePolicy,

    #[serde(skip)]
    labels: MetadataTable<String>,
}

impl Enumeration {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[AssignedMember] {
        &self.members
    }

    /// One past the largest assigned value.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of declared members.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicateValuePolicy {
        self.policy
    }

    #[must_use]
    pub const fn labels(&self) -> &MetadataTable<String> {
        &self.labels
    }

    /// True when every ordinal in `[0, total)` belongs to exactly one member.
    #[must_use]
    pub const fn is_dense(&self) -> bool {
        self.count() == self.total
    }

    /// True when some value is shared by more than one member.
    #[must_use]
    pub fn has_shared_values(&self) -> bool {
        self.labels.populated() != self.count()
    }

    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    /// The member owning `value`; the last-declared one when values are shared.
    #[must_use]
    pub fn member_at(&self, value: i64) -> Option<&AssignedMember> {
        self.members.iter().rev().find(|m| m.value == value)
    }
}

/// Synthesize an enumeration with the default configuration.
pub fn synthesize(name: &str, members: &[MemberDecl]) -> Result<Enumeration, SchemaError> {
    synthesize_with(name, members, &SynthConfig::default())
}

/// Assign values, compute `total`/`count` and build the label table.
pub fn synthesize_with(
    name: &str,
    members: &[MemberDecl],
    config: &SynthConfig,
) -> Result<Enumeration, SchemaError> {
    if members.is_empty() {
        return Err(SchemaError::EmptyMemberList {
            enum_name: name.to_string(),
        });
    }

    for decl in members {
        validate_ident(&decl.name).map_err(|reason| SchemaError::InvalidName {
            enum_name: name.to_string(),
            name: decl.name.clone(),
            reason,
        })?;
    }
    check_unique_names(name, members.iter().map(|m| m.name.as_str()))?;

    let assigned = assign_values(name, members, config.max_total)?;
    check_duplicate_values(name, &assigned, config.duplicate_values)?;

    let total = compute_total(name, &assigned, config.max_total)?;

    let mut enumeration = Enumeration {
        name: name.to_string(),
        members: assigned,
        total,
        policy: config.duplicate_values,
        labels: MetadataTable::empty(name, total),
    };

    // the label table is just the first table built over the member list
    enumeration.labels = build_table(&enumeration, name, members, |name, _| name.to_string())?;

    debug!(
        enumeration = name,
        total,
        count = enumeration.count(),
        "synthesized enumeration"
    );

    Ok(enumeration)
}

// Explicit values win; otherwise continue from the previous assigned value.
fn assign_values(
    name: &str,
    members: &[MemberDecl],
    max_total: usize,
) -> Result<Vec<AssignedMember>, SchemaError> {
    let mut assigned = Vec::with_capacity(members.len());
    let mut next: i128 = 0;

    for decl in members {
        let value = decl.value.map_or(next, i128::from);

        let value = i64::try_from(value).map_err(|_| SchemaError::TotalTooLarge {
            enum_name: name.to_string(),
            name: decl.name.clone(),
            needed: value.unsigned_abs() + 1,
            max: max_total,
        })?;

        if value < 0 {
            return Err(SchemaError::NegativeValue {
                enum_name: name.to_string(),
                name: decl.name.clone(),
                value,
            });
        }

        trace!(enumeration = name, member = %decl.name, value, "assigned value");

        assigned.push(AssignedMember {
            name: decl.name.clone(),
            value,
        });
        next = i128::from(value) + 1;
    }

    Ok(assigned)
}

fn compute_total(
    name: &str,
    members: &[AssignedMember],
    max_total: usize,
) -> Result<usize, SchemaError> {
    // members is non-empty and all values are non-negative here
    let Some(largest) = members.iter().max_by_key(|m| m.value) else {
        return Ok(0);
    };

    let needed = u128::from(largest.value.unsigned_abs()) + 1;
    match usize::try_from(needed) {
        Ok(total) if total <= max_total => Ok(total),
        _ => Err(SchemaError::TotalTooLarge {
            enum_name: name.to_string(),
            name: largest.name.clone(),
            needed,
            max: max_total,
        }),
    }
}

///
/// TESTS
///
