//! Render - Debug rendering for models
//!
//! Models render as `Name { key=value ... }` from their serialized form.
//! Fields that are absent are skipped rather than printed. The output is
//! meant for humans; nothing should parse it.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Write `record` as `name { key=value ... }`, skipping absent fields
pub fn fmt_record<T>(f: &mut fmt::Formatter<'_>, name: &str, record: &T) -> fmt::Result
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(record).map_err(|_| fmt::Error)?;
    write!(f, "{} {{", name)?;
    if let Value::Object(fields) = value {
        for (key, field) in fields.iter().filter(|(_, v)| !v.is_null()) {
            match field {
                Value::String(s) => write!(f, " {}={}", key, s)?,
                other => write!(f, " {}={}", key, other)?,
            }
        }
    }
    f.write_str(" }")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        vnic_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        is_primary: Option<bool>,
        nsg_ids: Vec<String>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_record(f, "Sample", self)
        }
    }

    #[test]
    fn skips_absent_fields() {
        let sample = Sample {
            vnic_id: "ocid1.vnic.x".to_string(),
            display_name: None,
            is_primary: None,
            nsg_ids: vec!["nsg1".to_string()],
        };
        let rendered = sample.to_string();
        assert!(rendered.starts_with("Sample {"));
        assert!(rendered.contains("vnicId=ocid1.vnic.x"));
        assert!(rendered.contains("nsgIds=[\"nsg1\"]"));
        assert!(!rendered.contains("displayName"));
        assert!(!rendered.contains("isPrimary"));
    }

    #[test]
    fn renders_present_scalars() {
        let sample = Sample {
            vnic_id: String::new(),
            display_name: Some("web".to_string()),
            is_primary: Some(true),
            nsg_ids: Vec::new(),
        };
        let rendered = sample.to_string();
        assert!(rendered.contains("displayName=web"));
        assert!(rendered.contains("isPrimary=true"));
    }
}
