//! PrivateEndpoint model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use chrono::{DateTime, Utc};
use corenet_core::enums::EnumValue;
use corenet_core::render;
use corenet_core::string_enum;
use corenet_core::tags::{DefinedTags, FreeformTags};
use corenet_core::validation::{EnumValidationError, EnumValidator, ValidateEnumValue};
use serde::{Deserialize, Serialize};

use super::ReverseConnectionConfiguration;

/// A private endpoint: a per-customer access point (a private IP and optional FQDN) in the
/// customer's VCN that fronts a service provider's endpoint service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateEndpoint {
    /// OCID of the compartment containing the private endpoint.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub compartment_id: String,

    /// OCID of the private endpoint.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub id: String,

    /// OCID of the endpoint service this private endpoint is associated with.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub endpoint_service_id: String,

    /// OCID of the customer VCN the private endpoint belongs to.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub vcn_id: String,

    /// OCID of the subnet the private endpoint belongs to.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub subnet_id: String,

    /// OCID of the VNIC backing the private endpoint.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub private_endpoint_vnic_id: String,

    /// Private IP address in the customer VCN through which the service is reached. Example:
    /// `10.0.3.4`
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub private_endpoint_ip: String,

    /// The private endpoint's current state.
    pub lifecycle_state: EnumValue<PrivateEndpointLifecycleState>,

    /// Defined tags for this resource. Each key is predefined and scoped to a namespace. Example:
    /// `{"Operations": {"CostCenter": "42"}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    /// A user-friendly name. Does not have to be unique, and it's changeable. Avoid entering
    /// confidential information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Free-form tags for this resource. Each tag is a simple key-value pair with no predefined
    /// name, type, or namespace. Example: `{"Department": "Finance"}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    /// A description of this private endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the private endpoint was created, in RFC 3339 format. Example:
    /// `2016-08-25T21:10:29.600Z`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,

    /// Three-label FQDN the service is reached through from the customer VCN. Example:
    /// `xyz.oraclecloud.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_fqdn: Option<String>,

    /// Additional FQDNs resolving to the private endpoint's IP, in the order they were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fqdns: Option<Vec<String>>,

    /// OCIDs of the network security groups the private endpoint's VNIC belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,

    /// Reverse connection settings, present when reverse connections are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_connection_configuration: Option<ReverseConnectionConfiguration>,
}

impl fmt::Display for PrivateEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "PrivateEndpoint", self)
    }
}

impl ValidateEnumValue for PrivateEndpoint {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .check("LifecycleState", Some(&self.lifecycle_state))
            .finish()
    }
}

string_enum! {
    /// Lifecycle state of a private endpoint.
    pub enum PrivateEndpointLifecycleState {
        Provisioning => "PROVISIONING",
        Available => "AVAILABLE",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Updating => "UPDATING",
        Failed => "FAILED",
    }
}
