use crate::{Member, MetaTable, member::find_value};
use std::{fmt::Debug, iter::Copied, slice::Iter};

///
/// EnumKind
///
/// Implemented by every generated enumeration. All associated data is built
/// at generation time and is immutable.
///

pub trait EnumKind: Copy + Debug + Eq + 'static {
    /// Type name as declared.
    const NAME: &'static str;

    /// One past the largest assigned value; the slot count of every table.
    const TOTAL: usize;

    /// Number of declared members.
    const COUNT: usize;

    /// Members in declaration order.
    const MEMBERS: &'static [Self];

    /// Member names and their assigned values in declaration order.
    const ENTRIES: &'static [Member];

    /// Automatic label table.
    const LABELS: MetaTable<&'static str, Self>;

    fn value(self) -> i64;

    fn from_value(value: i64) -> Option<Self>;

    fn name(self) -> &'static str;

    /// Label stored in this member's slot.
    fn label(self) -> &'static str {
        Self::LABELS.get(self.value()).copied().unwrap_or(self.name())
    }

    /// Whether `value` is the assigned value of a declared member.
    ///
    /// Range alone is not enough: ordinals inside `[0, TOTAL)` that fall in a
    /// sparse gap are not valid.
    fn is_valid(value: i64) -> bool {
        Self::LABELS.contains(value)
    }

    fn to_label(value: i64) -> Option<&'static str> {
        Self::LABELS.get(value).copied()
    }

    fn value_of(name: &str) -> Option<i64> {
        find_value(Self::ENTRIES, name)
    }

    fn iter() -> Copied<Iter<'static, Self>> {
        Self::MEMBERS.iter().copied()
    }
}

///
/// TableKind
///
/// Implemented by every generated auxiliary table.
///

pub trait TableKind: 'static {
    type Owner: EnumKind;
    type Value: 'static;

    const NAME: &'static str;
    const TABLE: MetaTable<Self::Value, Self::Owner>;

    fn get(value: i64) -> Option<&'static Self::Value> {
        Self::TABLE.get(value)
    }

    fn get_member(member: Self::Owner) -> Option<&'static Self::Value> {
        Self::TABLE.get(member.value())
    }
}
