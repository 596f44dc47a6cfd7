use sheetwise_domain::constants::{
    API_ROOT, INFO_DETAIL, SUMMARIZE_TAG, TAGS_METADATA, TESTING_TAG,
};

#[test]
fn exactly_two_documented_tags() {
    let names: Vec<_> = TAGS_METADATA.iter().map(|tag| tag.name).collect();
    assert_eq!(names, [TESTING_TAG, SUMMARIZE_TAG]);
}

#[test]
fn tags_carry_descriptions_and_links() {
    for tag in TAGS_METADATA {
        assert!(!tag.description.is_empty(), "{} has no description", tag.name);
        assert!(tag.external_docs.url.starts_with("https://"));
        assert!(!tag.external_docs.description.is_empty());
    }
}

#[test]
fn info_detail_points_to_docs() {
    assert_eq!(INFO_DETAIL, "view /docs for documentation.");
    assert_eq!(API_ROOT, "/api");
}
