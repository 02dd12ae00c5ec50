//! End-to-end fixtures: enumerations and tables declared through both the
//! attribute macros and the build-script generator.

#[cfg(test)]
mod test;

/// Items generated from `schema.json` by `build.rs`.
pub mod schema {
    include!(concat!(env!("OUT_DIR"), "/enumfactory.rs"));
}

///
/// Unit
///
/// Extracted value of the `AxisUnit` table.
///

#[derive(Debug, PartialEq)]
pub struct Unit {
    pub axis: &'static str,
    pub sign: f64,
}

impl Unit {
    #[must_use]
    pub const fn new(axis: &'static str, sign: f64) -> Self {
        Self { axis, sign }
    }
}
