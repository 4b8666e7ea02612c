//! InternalPublicIp model for the Core Services API
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

/// A public IP address reserved or assigned for internal use, either ephemeral (tied to its
/// assigned entity) or reserved (managed independently).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternalPublicIp {
    /// OCID of the compartment containing the public IP.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub compartment_id: String,

    /// OCID of the public IP.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub id: String,

    /// When the public IP is deleted and released back to the public IP pool.
    pub lifetime: EnumValue<InternalPublicIpLifetime>,

    /// OCID of the entity the public IP is assigned to, or is being assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_entity_id: Option<String>,

    /// Type of the entity the public IP is assigned to, or is being assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_entity_type: Option<EnumValue<InternalPublicIpAssignedEntityType>>,

    /// Availability domain of the assigned private IP. Only set for ephemeral public IPs scoped to
    /// an availability domain. Example: `Uocm:PHX-AD-1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,

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

    /// The public IP address. Example: `203.0.113.2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// The public IP's current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<EnumValue<InternalPublicIpLifecycleState>>,

    /// OCID of the private IP the public IP is assigned to. Deprecated in favour of
    /// assignedEntityId.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_id: Option<String>,

    /// Whether the public IP is regional or specific to an availability domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<EnumValue<InternalPublicIpScope>>,

    /// When the public IP was created, in RFC 3339 format. Example: `2016-08-25T21:10:29.600Z`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,

    /// OCID of the pool the public IP was allocated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_pool_id: Option<String>,
}

impl fmt::Display for InternalPublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "InternalPublicIp", self)
    }
}

impl ValidateEnumValue for InternalPublicIp {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .check("Lifetime", Some(&self.lifetime))
            .check("AssignedEntityType", self.assigned_entity_type.as_ref())
            .check("LifecycleState", self.lifecycle_state.as_ref())
            .check("Scope", self.scope.as_ref())
            .finish()
    }
}

string_enum! {
    /// Kind of entity a public IP is assigned to.
    pub enum InternalPublicIpAssignedEntityType {
        PrivateIp => "PRIVATE_IP",
        NatGateway => "NAT_GATEWAY",
    }
}

string_enum! {
    /// Lifecycle state of a public IP.
    pub enum InternalPublicIpLifecycleState {
        Provisioning => "PROVISIONING",
        Available => "AVAILABLE",
        Assigning => "ASSIGNING",
        Assigned => "ASSIGNED",
        Unassigning => "UNASSIGNING",
        Unassigned => "UNASSIGNED",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
    }
}

string_enum! {
    /// Lifetime of a public IP: ephemeral IPs follow their assigned entity, reserved IPs are
    /// managed independently.
    pub enum InternalPublicIpLifetime {
        Ephemeral => "EPHEMERAL",
        Reserved => "RESERVED",
    }
}

string_enum! {
    /// Scope of a public IP.
    pub enum InternalPublicIpScope {
        Region => "REGION",
        AvailabilityDomain => "AVAILABILITY_DOMAIN",
    }
}
