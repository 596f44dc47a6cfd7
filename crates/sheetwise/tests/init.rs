use sheetwise::domain::config::ApiConfig;
use sheetwise::features::{self, summarize::Summarize};

#[test]
fn init_registers_summarize_slice() {
    let slices = sheetwise::init(&ApiConfig::default(), None).expect("init should succeed");
    assert_eq!(slices.len(), 1);
    assert!(slices[0].downcast_ref::<Summarize>().is_some());
}

#[test]
fn summarize_is_always_enabled() {
    assert!(features::is_enabled("summarize"));
    assert!(!features::is_enabled("licensing"));
}
