use crate::prelude::*;
use std::collections::HashSet;
use tracing::debug;

///
/// MetadataTable
///
/// Generation-time view of a parallel table: `total` slots indexed by
/// ordinal, populated only where a member of the owner was resolved.
///

#[derive(Clone, Debug, PartialEq)]
pub struct MetadataTable<T> {
    owner: String,
    slots: Vec<Option<T>>,
}

impl<T> MetadataTable<T> {
    pub(crate) fn empty(owner: &str, total: usize) -> Self {
        Self {
            owner: owner.to_string(),
            slots: std::iter::repeat_with(|| None).take(total).collect(),
        }
    }

    /// Name of the owning enumeration.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Safe indexed read; out of range and gaps are both `None`.
    #[must_use]
    pub fn get(&self, value: i64) -> Option<&T> {
        let index = usize::try_from(value).ok()?;

        self.slots.get(index)?.as_ref()
    }

    #[must_use]
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Populated slots in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((i64::try_from(index).ok()?, slot.as_ref()?)))
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }
}

/// Build a table whose values are computed by `extractor(name, payload)`.
///
/// Rows are resolved through the owner's name-to-value mapping, so their
/// order does not matter.
pub fn build_table<T, F>(
    owner: &Enumeration,
    table: &str,
    rows: &[MemberDecl],
    mut extractor: F,
) -> Result<MetadataTable<T>, SchemaError>
where
    F: FnMut(&str, &[Value]) -> T,
{
    try_build_table(owner, table, rows, |name, payload| {
        Ok(extractor(name, payload))
    })
}

/// Like [`build_table`], for extractors that can reject a row.
pub fn try_build_table<T, F>(
    owner: &Enumeration,
    table: &str,
    rows: &[MemberDecl],
    mut extractor: F,
) -> Result<MetadataTable<T>, SchemaError>
where
    F: FnMut(&str, &[Value]) -> Result<T, SchemaError>,
{
    let mut out = MetadataTable::empty(owner.name(), owner.total());
    let mut seen = HashSet::new();

    for row in rows {
        let Some(value) = owner.value_of(&row.name) else {
            return Err(SchemaError::UnknownMember {
                table: table.to_string(),
                enum_name: owner.name().to_string(),
                name: row.name.clone(),
            });
        };

        if !seen.insert(row.name.as_str()) {
            return Err(SchemaError::DuplicateRow {
                table: table.to_string(),
                name: row.name.clone(),
            });
        }

        // value_of only returns assigned values, which are inside [0, total)
        let slot = usize::try_from(value)
            .ok()
            .and_then(|index| out.slots.get_mut(index));
        if let Some(slot) = slot {
            *slot = Some(extractor(&row.name, &row.payload)?);
        }
    }

    debug!(
        table,
        owner = owner.name(),
        populated = out.populated(),
        total = out.total(),
        "built metadata table"
    );

    Ok(out)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::safe_get;

    fn levels() -> Enumeration {
        synthesize(
            "Level",
            &[
                MemberDecl::new("LOW").with_value(1),
                MemberDecl::new("MEDIUM").with_value(5),
                MemberDecl::new("HIGH").with_value(10),
            ],
        )
        .unwrap()
    }

    fn score(payload: &[Value]) -> i64 {
        payload.first().and_then(Value::as_int).unwrap_or_default()
    }

    #[test]
    fn score_table_is_keyed_by_assigned_value() {
        let level = levels();
        let rows = vec![
            MemberDecl::new("LOW").with_payload([0]),
            MemberDecl::new("MEDIUM").with_payload([50]),
            MemberDecl::new("HIGH").with_payload([100]),
        ];
        let table = build_table(&level, "LevelScore", &rows, |_, p| score(p)).unwrap();

        assert_eq!(level.total(), 11);
        assert_eq!(table.total(), 11);
        assert_eq!(safe_get(&table, &level, 5), Some(&50));
        assert_eq!(safe_get(&table, &level, 99), None);
        assert_eq!(safe_get(&table, &level, 2), None);
        assert_eq!(table.owner(), "Level");
    }

    #[test]
    fn unknown_member_fails_generation() {
        let owner = synthesize(
            "Axis",
            &[
                MemberDecl::new("X"),
                MemberDecl::new("Y"),
                MemberDecl::new("Z"),
            ],
        )
        .unwrap();
        let rows = vec![
            MemberDecl::new("X"),
            MemberDecl::new("Y"),
            MemberDecl::new("W"),
        ];
        let err = build_table(&owner, "AxisLabel", &rows, |n, _| n.to_string()).unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownMember {
                table: "AxisLabel".into(),
                enum_name: "Axis".into(),
                name: "W".into(),
            }
        );
    }

    #[test]
    fn repeated_rows_fail_generation() {
        let rows = vec![
            MemberDecl::new("LOW").with_payload([1]),
            MemberDecl::new("LOW").with_payload([2]),
        ];
        let err = build_table(&levels(), "Twice", &rows, |_, p| score(p)).unwrap_err();

        assert!(matches!(err, SchemaError::DuplicateRow { ref name, .. } if name == "LOW"));
    }

    #[test]
    fn partial_tables_leave_other_members_absent() {
        let level = levels();
        let rows = vec![MemberDecl::new("HIGH").with_payload(["urgent"])];
        let table = build_table(&level, "Note", &rows, |_, p| p[0].to_string()).unwrap();

        assert_eq!(table.populated(), 1);
        assert_eq!(table.get(10).map(String::as_str), Some("\"urgent\""));
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn row_order_does_not_change_the_table() {
        let level = levels();
        let forward = vec![
            MemberDecl::new("LOW").with_payload([0]),
            MemberDecl::new("MEDIUM").with_payload([50]),
            MemberDecl::new("HIGH").with_payload([100]),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a = build_table(&level, "A", &forward, |_, p| score(p)).unwrap();
        let b = build_table(&level, "B", &backward, |_, p| score(p)).unwrap();

        assert_eq!(a, b);
        for (value, label) in level.labels().iter() {
            assert!(a.get(value).is_some(), "{label} should have a score");
        }
    }

    #[test]
    fn extractor_errors_propagate() {
        let rows = vec![MemberDecl::new("LOW")];
        let err = try_build_table(&levels(), "Strict", &rows, |name, payload| {
            Err::<i64, _>(SchemaError::PayloadArity {
                table: "Strict".into(),
                name: name.to_string(),
                found: payload.len(),
            })
        })
        .unwrap_err();

        assert_eq!(err.member(), Some("LOW"));
    }
}
