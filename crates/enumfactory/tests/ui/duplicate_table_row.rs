#![allow(dead_code)]

use enumfactory::prelude::*;

#[enumeration(member(ident = "Low", value = 1), member(ident = "High", value = 10))]
pub struct Level;

#[table(
    owner = "Level",
    ty = "u8",
    row(member = "Low", value = 0),
    row(member = "High", value = 100),
    row(member = "Low", value = 5)
)]
pub struct LevelScore;

fn main() {}
