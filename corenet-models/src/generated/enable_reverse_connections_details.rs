//! EnableReverseConnectionsDetails model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use corenet_core::enums::EnumValue;
use corenet_core::render;
use corenet_core::validation::{EnumValidationError, EnumValidator, ValidateEnumValue};
use serde::{Deserialize, Serialize};

use super::{
    DefaultDnsContextTransport, DefaultDnsResolutionContext, ProxyType,
    ReverseConnectionsSourceIpDetails,
};

/// Request body for enabling reverse connections on a private endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnableReverseConnectionsDetails {
    /// IP addresses in the customer VCN used as source IPs for reverse connection packets sent from
    /// the service VCN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_connections_source_ips: Option<Vec<ReverseConnectionsSourceIpDetails>>,

    /// Whether a DNS proxy is configured for the reverse connection. Set to `false` when the
    /// service never reaches customer endpoints by FQDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_proxy_enabled: Option<bool>,

    /// Proxies spawned for this reverse connection, all reachable on proxyIp. Defaults to a DNS
    /// proxy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<Vec<EnumValue<ProxyType>>>,

    /// IP address in the service VCN used to reach the reverse connection proxies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_ip: Option<String>,

    /// IP address in the service VCN used to reach the reverse connection proxies. Deprecated in
    /// favour of proxyIp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_proxy_ip: Option<String>,

    /// Context in which the DNS proxy resolves queries, unless the FQDN belongs to one of
    /// excludedDnsZones. Defaults to `SERVICE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dns_resolution_context: Option<EnumValue<DefaultDnsResolutionContext>>,

    /// DNS zones excluded from the default DNS resolution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_dns_zones: Option<Vec<String>>,

    /// OCID of the service subnet where the DNS proxy endpoint is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_subnet_id: Option<String>,

    /// OCIDs of the network security groups the reverse connection's VNIC belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<String>>,

    /// Number of customer endpoints the service provider expects to reach. When non-zero, dedicated
    /// NAT IP CIDRs are allocated; zero draws from the shared pool. May grow but never shrink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_endpoints_size: Option<i64>,

    /// Layer 4 transport used when resolving DNS queries within the default DNS resolution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dns_context_transport: Option<EnumValue<DefaultDnsContextTransport>>,

    /// CIDRs NAT IP addresses are allocated from. Not shared with other reverse connection enabled
    /// private endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_connection_nat_ip_cidrs: Option<Vec<String>>,

    /// Whether the reverse connection uses a single IP for both forward and reverse traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_ip_enabled: Option<bool>,
}

impl fmt::Display for EnableReverseConnectionsDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "EnableReverseConnectionsDetails", self)
    }
}

impl ValidateEnumValue for EnableReverseConnectionsDetails {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .check_each("ProxyType", self.proxy_type.as_deref().unwrap_or_default())
            .check("DefaultDnsResolutionContext", self.default_dns_resolution_context.as_ref())
            .check("DefaultDnsContextTransport", self.default_dns_context_transport.as_ref())
            .finish()
    }
}
