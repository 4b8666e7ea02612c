//! PrivateEndpointAssociation model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use corenet_core::render;
use corenet_core::validation::{EnumValidationError, ValidateEnumValue};
use serde::{Deserialize, Serialize};

use super::ReverseConnectionConfiguration;

/// Summary of a private endpoint attached to an endpoint service, as listed for that service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateEndpointAssociation {
    /// OCID of the private endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Private IP address of the private endpoint in the customer VCN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_endpoint_ip: Option<String>,

    /// Three-label FQDN the service is reached through from the customer VCN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_fqdn: Option<String>,

    /// Additional FQDNs resolving to the private endpoint's IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fqdns: Option<Vec<String>>,

    /// Reverse connection settings, present when reverse connections are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_connection_configuration: Option<ReverseConnectionConfiguration>,
}

impl fmt::Display for PrivateEndpointAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "PrivateEndpointAssociation", self)
    }
}

impl ValidateEnumValue for PrivateEndpointAssociation {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        Ok(())
    }
}
