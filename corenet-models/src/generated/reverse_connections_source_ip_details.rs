//! ReverseConnectionsSourceIpDetails model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use corenet_core::render;
use corenet_core::validation::{EnumValidationError, ValidateEnumValue};
use serde::{Deserialize, Serialize};

/// A source IP used for reverse connection packets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverseConnectionsSourceIpDetails {
    /// IP address in the customer VCN used as the source IP of reverse connection packets. Example:
    /// `10.0.0.5`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl fmt::Display for ReverseConnectionsSourceIpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "ReverseConnectionsSourceIpDetails", self)
    }
}

impl ValidateEnumValue for ReverseConnectionsSourceIpDetails {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        Ok(())
    }
}
