use crate::prelude::*;

///
/// MemberDecl
///
/// One entry of a member list: a name, an optional explicit value and any
/// number of payload literals. Payloads are only read by auxiliary tables.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    #[serde(alias = "member")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<Value>,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            payload: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_payload<V: Into<Value>>(mut self, payload: impl IntoIterator<Item = V>) -> Self {
        self.payload.extend(payload.into_iter().map(Into::into));
        self
    }
}

///
/// AssignedMember
///
/// A member after value assignment.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct AssignedMember {
    pub name: String,
    pub value: i64,
}
