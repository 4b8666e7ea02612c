//! Tags - Shapes of the tag maps carried by Core Services resources

use std::collections::HashMap;

/// Free-form tags: a flat map of tag name to value
///
/// Example: `{"Department": "Finance"}`
pub type FreeformTags = HashMap<String, String>;

/// Defined tags: namespace -> tag key -> arbitrary JSON scalar
///
/// Also the shape of `systemTags`.
/// Example: `{"Operations": {"CostCenter": "42"}}`
pub type DefinedTags = HashMap<String, HashMap<String, serde_json::Value>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_tags_accept_any_scalar() {
        let tags: DefinedTags = serde_json::from_str(
            r#"{"Operations": {"CostCenter": "42", "Priority": 3, "Critical": true}}"#,
        )
        .unwrap();
        let operations = &tags["Operations"];
        assert_eq!(operations["CostCenter"], serde_json::json!("42"));
        assert_eq!(operations["Priority"], serde_json::json!(3));
        assert_eq!(operations["Critical"], serde_json::json!(true));
    }

    #[test]
    fn freeform_tags_are_flat_strings() {
        let tags: FreeformTags = serde_json::from_str(r#"{"Department": "Finance"}"#).unwrap();
        assert_eq!(tags.get("Department").map(String::as_str), Some("Finance"));
        assert!(serde_json::from_str::<FreeformTags>(r#"{"Department": 1}"#).is_err());
    }
}
