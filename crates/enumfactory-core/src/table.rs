use crate::EnumKind;
use std::{fmt, marker::PhantomData};

///
/// MetaTable
///
/// Ordinal-indexed parallel table owned by the enumeration `E`.
///
/// A table always has exactly `E::TOTAL` slots. Slots belonging to a declared
/// member hold a value, every other slot (sparse gaps) is absent. Lookups never
/// read out of range: a negative or too large ordinal resolves to `None`, just
/// like a gap does.
///

pub struct MetaTable<T: 'static, E> {
    slots: &'static [Option<T>],
    _owner: PhantomData<fn() -> E>,
}

impl<T: 'static, E: EnumKind> MetaTable<T, E> {
    /// Wrap generated slots. Panics during const evaluation when the slot count
    /// does not match the owner's `TOTAL`.
    #[must_use]
    pub const fn new(slots: &'static [Option<T>]) -> Self {
        assert!(
            slots.len() == E::TOTAL,
            "metadata table slot count must equal the owning enumeration's TOTAL"
        );

        Self {
            slots,
            _owner: PhantomData,
        }
    }

    /// Number of slots, equal to the owner's `TOTAL`.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.slots.len()
    }

    /// Safe indexed read.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn get(&self, value: i64) -> Option<&'static T> {
        let slots: &'static [Option<T>] = self.slots;

        // bounds checked before the cast
        if value < 0 || value as u64 >= slots.len() as u64 {
            return None;
        }

        slots[value as usize].as_ref()
    }

    /// Read the slot belonging to a member of the owning enumeration.
    #[must_use]
    pub fn get_member(&self, member: E) -> Option<&'static T> {
        self.get(member.value())
    }

    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.get(value).is_some()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Populated slots in ordinal order, gaps skipped.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &'static T)> {
        let slots: &'static [Option<T>] = self.slots;

        slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((i64::try_from(index).ok()?, slot.as_ref()?)))
    }
}

impl<T: 'static, E> Clone for MetaTable<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, E> Copy for MetaTable<T, E> {}

impl<T: fmt::Debug + 'static, E: EnumKind> fmt::Debug for MetaTable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaTable")
            .field("owner", &E::NAME)
            .field("total", &self.total())
            .field("populated", &self.populated())
            .finish()
    }
}
