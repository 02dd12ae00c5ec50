/// Build-script entry point: generate Rust source for a JSON schema file into
/// `OUT_DIR/enumfactory.rs`. Use inside a `main` returning a boxed error.
///
/// ```ignore
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     enumfactory_build::build!("enums.json");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! build {
    ($schema:expr) => {
        $crate::build!($schema, "enumfactory.rs")
    };
    ($schema:expr, $out_file:expr) => {{
        println!("cargo:rerun-if-changed=build.rs");

        $crate::BuildConfig::new($schema).out_file($out_file).run()?;
    }};
}
