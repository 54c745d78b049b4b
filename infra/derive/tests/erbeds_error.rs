#[test]
fn erbeds_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/erbeds_error_pass.rs");
    t.pass("tests/ui/erbeds_error_context.rs");
}
