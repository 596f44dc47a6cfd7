use sheetwise_domain::config::SummarizeConfig;
use sheetwise_summarize::{Summarize, init};

#[test]
fn init_creates_slice_without_api_key() {
    let config = SummarizeConfig { api_key: None, ..SummarizeConfig::default() };
    let slice = init(&config).expect("init should succeed without credentials");
    assert_eq!(slice.id, std::any::TypeId::of::<Summarize>());
    assert!(slice.downcast_ref::<Summarize>().is_some());
}
