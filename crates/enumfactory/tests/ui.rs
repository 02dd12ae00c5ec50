#[test]
fn generation_errors_fail_compilation() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
