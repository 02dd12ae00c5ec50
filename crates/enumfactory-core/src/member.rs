///
/// Member
///
/// One declared member of a generated enumeration, as seen at run time.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Member {
    pub name: &'static str,
    pub value: i64,
}

impl Member {
    #[must_use]
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self { name, value }
    }
}

/// Resolve a member name to its assigned value.
///
/// Usable in const context so generated tables can resolve their rows while
/// being evaluated by the compiler.
#[must_use]
pub const fn find_value(members: &[Member], name: &str) -> Option<i64> {
    let mut i = 0;
    while i < members.len() {
        if str_eq(members[i].name, name) {
            return Some(members[i].value);
        }
        i += 1;
    }

    None
}

/// Resolve a member name to the table slot it occupies.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn find_slot(members: &[Member], name: &str) -> Option<usize> {
    match find_value(members, name) {
        // assigned values are never negative
        Some(value) if value >= 0 => Some(value as usize),
        _ => None,
    }
}

// const-evaluable string equality
const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

///
/// TESTS
///
