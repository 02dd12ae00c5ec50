#![allow(dead_code)]

use enumfactory::prelude::*;

#[enumeration(member(ident = "X"), member(ident = "Y"), member(ident = "Z"))]
pub struct Axis;

#[table(
    owner = "Axis",
    case = "lower",
    row(member = "X"),
    row(member = "Y"),
    row(member = "W")
)]
pub struct AxisLabel;

fn main() {}
