//! Generated Core Services API models
//!
//! Each module is generated from the matching `schemas/*.json` file:
//!   ./scripts/generate-models.sh
//!
//! This file lists the modules and is edited by hand.

pub mod create_internal_vnic_details;
pub mod enable_reverse_connections_details;
pub mod internal_public_ip;
pub mod private_endpoint;
pub mod private_endpoint_association;
pub mod reverse_connection_configuration;
pub mod reverse_connections_source_ip_details;
pub mod update_vnic_shape_details;
pub mod vnic_shape;

pub use create_internal_vnic_details::{
    CreateInternalVnicDetails, InternalPoolName, ServiceVnicType,
};
pub use enable_reverse_connections_details::EnableReverseConnectionsDetails;
pub use internal_public_ip::{
    InternalPublicIp, InternalPublicIpAssignedEntityType, InternalPublicIpLifecycleState,
    InternalPublicIpLifetime, InternalPublicIpScope,
};
pub use private_endpoint::{PrivateEndpoint, PrivateEndpointLifecycleState};
pub use private_endpoint_association::PrivateEndpointAssociation;
pub use reverse_connection_configuration::{
    DefaultDnsContextTransport, DefaultDnsResolutionContext, ProxyType,
    ReverseConnectionConfiguration, ReverseConnectionConfigurationLifecycleState,
};
pub use reverse_connections_source_ip_details::ReverseConnectionsSourceIpDetails;
pub use update_vnic_shape_details::UpdateVnicShapeDetails;
pub use vnic_shape::VnicShape;
