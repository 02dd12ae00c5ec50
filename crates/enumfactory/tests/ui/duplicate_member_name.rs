#![allow(dead_code)]

use enumfactory::prelude::*;

#[enumeration(
    member(ident = "A"),
    member(ident = "B"),
    member(ident = "A")
)]
pub struct Letters;

fn main() {}
