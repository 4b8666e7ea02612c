//! CreateInternalVnicDetails model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use corenet_core::enums::EnumValue;
use corenet_core::render;
use corenet_core::string_enum;
use corenet_core::tags::{DefinedTags, FreeformTags};
use corenet_core::validation::{EnumValidationError, EnumValidator, ValidateEnumValue};
use serde::{Deserialize, Serialize};

use super::VnicShape;

/// Request body for creating a VNIC on behalf of an internal client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateInternalVnicDetails {
    /// Whether the VNIC should be assigned a public IP address. Defaults to whether the subnet is
    /// public or private; requesting one in a subnet that prohibits public IPs is an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_public_ip: Option<bool>,

    /// The availability domain of the instance. Must be absent when isServiceVnic is true, and is
    /// required otherwise. Example: `Uocm:PHX-AD-1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,

    /// Not for general use. Skips Internet ingress/egress throttling for this VNIC. Defaults to
    /// `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_internet_throttle: Option<bool>,

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

    /// Hostname for the VNIC's primary private IP, used for DNS. Must be unique across the subnet
    /// and comply with RFC 952 and RFC 1123. Example: `bminstance-1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,

    /// Whether the VNIC is associated with (and will be attached to) a bare metal instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bm_vnic: Option<bool>,

    /// Whether the VNIC is a bridge VNIC, for which the data plane answers ARP for its MAC address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bridge_vnic: Option<bool>,

    /// Whether this VNIC can issue GARP requests. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_garp_enabled: Option<bool>,

    /// Whether MAC learning is enabled for the VNIC. When set, no MAC address is allocated and the
    /// returned VNIC carries none. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mac_learning_enabled: Option<bool>,

    /// Whether the VNIC is managed by an internal partner team, in which case customers cannot
    /// update or delete it directly. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed: Option<bool>,

    /// Whether the VNIC is primary, which means it cannot be detached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,

    /// Whether the VNIC is a service VNIC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_service_vnic: Option<bool>,

    /// Internal public IP pool to allocate from. Only used when no publicIpPoolId is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_pool_name: Option<EnumValue<InternalPoolName>>,

    /// The overlay MAC address of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    /// OCIDs of the network security groups to add the VNIC to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,

    /// ID of the entity owning the VNIC. When absent and the VNIC is attached, the attached
    /// instance is the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Primary private IP address to assign. Must be available within the subnet's CIDR; one is
    /// chosen automatically when absent. Example: `10.0.3.3`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,

    /// OCID of the public IP pool created in the current tenancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_pool_id: Option<String>,

    /// ID of the customer visible upstream resource (for example a load balancer or DB system) the
    /// VNIC is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Type of the upstream resource identified by resourceId, for example `loadbalancer` or
    /// `dbsystem`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Whether the source/destination check is disabled on the VNIC. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_source_dest_check: Option<bool>,

    /// OCID of the subnet to create the VNIC in. At least one of subnetId or vlanId is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    /// System tags for this resource. Each key is predefined and scoped to a namespace. Example:
    /// `{"orcl-cloud": {"free-tier-retained": "true"}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_tags: Option<DefinedTags>,

    /// OCID of the VLAN that the VNIC belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,

    /// OCID of the compartment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    /// Whether NAT IP allocation is skipped for this VNIC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_nat_ip_allocation_disabled: Option<bool>,

    /// Whether external customers are blocked from adding private IPs to this VNIC. Defaults to
    /// `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private_ip_creation_blocked: Option<bool>,

    /// Whether the VNIC should get a public IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_public_ip: Option<bool>,

    /// Whether the VNIC is connected to VNIC as a Service. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vnic_service_vnic: Option<bool>,

    /// MPLS label used with a VNIC connected to VNIC as a Service. Required when isVnicServiceVnic
    /// is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_mpls_label: Option<i64>,

    /// Feature or use case creating this service VNIC. Used for forecasting, resource limits
    /// enforcement, and capacity management.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_vnic_type: Option<EnumValue<ServiceVnicType>>,

    /// Shape used to allocate resources in the data plane once the VNIC is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnic_shape: Option<EnumValue<VnicShape>>,
}

impl fmt::Display for CreateInternalVnicDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "CreateInternalVnicDetails", self)
    }
}

impl ValidateEnumValue for CreateInternalVnicDetails {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .check("InternalPoolName", self.internal_pool_name.as_ref())
            .check("ServiceVnicType", self.service_vnic_type.as_ref())
            .check("VnicShape", self.vnic_shape.as_ref())
            .finish()
    }
}

string_enum! {
    /// Internal public IP pool a VNIC's public IP is drawn from.
    pub enum InternalPoolName {
        External => "EXTERNAL",
        SociEgress => "SOCI_EGRESS",
    }
}

string_enum! {
    /// Feature or use case that creates a service VNIC.
    pub enum ServiceVnicType {
        PrivateEndpoint => "PRIVATE_ENDPOINT",
        ReverseConnectionEndpoint => "REVERSE_CONNECTION_ENDPOINT",
        RealVirtualRouter => "REAL_VIRTUAL_ROUTER",
        PrivateDnsEndpoint => "PRIVATE_DNS_ENDPOINT",
    }
}
