use crate::schema::{HttpStatus, HttpStatusText};
use enumfactory::prelude::*;

// the same enumeration declared through the attribute macro
#[enumeration(
    member(ident = "Ok", value = 200),
    member(ident = "Created"),
    member(ident = "NotFound", value = 404),
    member(ident = "Error", value = 500)
)]
pub struct MacroStatus;

#[table(owner = "HttpStatus", case = "snake", row(member = "NotFound"))]
pub struct HttpStatusKey;

#[test]
fn both_paths_agree() {
    assert_eq!(MacroStatus::TOTAL, HttpStatus::TOTAL);
    assert_eq!(MacroStatus::COUNT, HttpStatus::COUNT);

    for (ours, theirs) in MacroStatus::iter().zip(HttpStatus::iter()) {
        assert_eq!(ours.value(), theirs.value());
        assert_eq!(ours.name(), theirs.name());
    }

    for value in 0..600 {
        assert_eq!(MacroStatus::to_label(value), HttpStatus::to_label(value));
    }
}

#[test]
fn macro_tables_attach_to_generated_enumerations() {
    assert_eq!(HttpStatusKey::get(404), Some(&"not_found"));
    assert_eq!(HttpStatusKey::get(200), None);
    assert_eq!(HttpStatusText::get(200), Some(&"OK"));
}
