use sheetwise_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Single-field envelope used by informational and error responses.
pub struct Detail {
    /// Human-readable message.
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_field() {
        let json = serde_json::to_value(Detail::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "detail": "boom" }));
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed = serde_json::from_str::<Detail>(r#"{"detail":"x","extra":1}"#);
        assert!(parsed.is_err());
    }
}
