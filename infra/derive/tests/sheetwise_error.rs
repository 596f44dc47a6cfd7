#[test]
fn sheetwise_error_expands() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/sheetwise_error_pass.rs");
}
