//! De - Deserialization helpers for generated models

use serde::{Deserialize, Deserializer};

/// Deserialize a mandatory field, reading JSON `null` as the default value
///
/// Mandatory fields are not enforced on decode: a `null` reads the same
/// as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "null_as_default")]
        id: String,
        #[serde(deserialize_with = "null_as_default")]
        names: Vec<String>,
    }

    #[test]
    fn null_reads_as_default() {
        let record: Record = serde_json::from_str(r#"{"id": null, "names": null}"#).unwrap();
        assert_eq!(record, Record::default());
    }

    #[test]
    fn present_and_absent_values() {
        let record: Record = serde_json::from_str(r#"{"id": "ocid1.vnic.x"}"#).unwrap();
        assert_eq!(record.id, "ocid1.vnic.x");
        assert!(record.names.is_empty());
        assert!(serde_json::from_str::<Record>(r#"{"id": 7}"#).is_err());
    }
}
