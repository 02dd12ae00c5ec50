use crate::{Unit, schema::*};
use enumfactory::prelude::*;

#[test]
fn generated_enumeration_matches_the_file() {
    assert_eq!((HttpStatus::TOTAL, HttpStatus::COUNT), (501, 4));
    assert_eq!(HttpStatus::Created.value(), 201);
    assert_eq!(HttpStatus::to_label(201), Some("Created"));
    assert!(!HttpStatus::is_valid(202));
    assert_eq!(<HttpStatus as EnumKind>::NAME, "HttpStatus");
}

#[test]
fn generated_tables_resolve_by_value() {
    assert_eq!(HttpStatusText::get(404), Some(&"Not Found"));
    assert_eq!(HttpStatusText::get(405), None);
    assert_eq!(HttpStatusRetry::get_member(HttpStatus::Error), Some(&true));
    assert_eq!(HttpStatusRetry::get_member(HttpStatus::Ok), None);
}

#[test]
fn generated_label_and_extract_tables() {
    assert_eq!(AxisName::get(2), Some(&"z"));
    assert_eq!(
        AxisUnit::get_member(Axis::Y),
        Some(&Unit {
            axis: "Y",
            sign: -1.0,
        })
    );
    assert_eq!(AxisUnit::get_member(Axis::Z), None);
}

#[test]
fn generated_shared_values_keep_the_last_member() {
    assert_eq!((Protocol::TOTAL, Protocol::COUNT), (444, 3));
    assert_eq!(Protocol::to_label(80), Some("Www"));
    assert_eq!(Protocol::from_value(80), Some(Protocol::Www));
    assert_eq!(Protocol::Http.value(), 80);
}
