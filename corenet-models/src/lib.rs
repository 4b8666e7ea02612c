//! Corenet Models
//!
//! Core Services API request and response models for VNICs, VNIC shapes,
//! private endpoints and their reverse connection settings.
//!
//! ## Module Structure
//!
//! - `generated` - Models and enumerations generated from `schemas/*.json`
//! - `body` - Validated request bodies and response decoding

pub mod body;
pub mod generated;

// Re-export main types
pub use body::{BodyError, from_response_body, to_request_body, to_request_value};
pub use corenet_core::{EnumValue, StringEnum, ValidateEnumValue};
pub use generated::*;

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::{DateTime, Utc};
    use corenet_core::{EnumValue, StringEnum, ValidateEnumValue};
    use serde_json::json;

    use crate::generated::*;

    fn lines(err: &corenet_core::EnumValidationError) -> Vec<String> {
        err.to_string().split('\n').map(str::to_string).collect()
    }

    fn available_endpoint() -> PrivateEndpoint {
        PrivateEndpoint {
            compartment_id: "ocid1.compartment.oc1..aaaa".to_string(),
            id: "ocid1.privateendpoint.oc1..aaaa".to_string(),
            endpoint_service_id: "ocid1.endpointservice.oc1..aaaa".to_string(),
            vcn_id: "ocid1.vcn.oc1..aaaa".to_string(),
            subnet_id: "ocid1.subnet.oc1..aaaa".to_string(),
            private_endpoint_vnic_id: "ocid1.vnic.oc1..aaaa".to_string(),
            private_endpoint_ip: "10.0.3.4".to_string(),
            lifecycle_state: PrivateEndpointLifecycleState::Available.into(),
            ..Default::default()
        }
    }

    // Scenarios

    #[test]
    fn vnic_shape_update_with_declared_shape_is_valid() {
        let details = UpdateVnicShapeDetails {
            vnic_id: "ocid1.vnic.x".to_string(),
            vnic_shape: "DYNAMIC_E4_50G".into(),
        };
        assert_eq!(details.validate_enum_value(), Ok(()));
        assert!(!details.has_invalid_enum_values());
        assert_eq!(details.vnic_shape.known(), Some(VnicShape::DynamicE450g));
    }

    #[test]
    fn vnic_shape_update_lists_every_shape_in_order() {
        let details = UpdateVnicShapeDetails {
            vnic_id: "ocid1.vnic.x".to_string(),
            vnic_shape: "dynamic_e4_50g".into(),
        };
        let err = details.validate_enum_value().unwrap_err();
        let expected = format!(
            "unsupported enum value for VnicShape: dynamic_e4_50g. Supported values are: {}.",
            VnicShape::STRING_VALUES.join(",")
        );
        assert_eq!(err.to_string(), expected);
        assert!(err.to_string().contains(
            "Supported values are: DYNAMIC,FIXED0040,FIXED0060,FIXED0060_PSM,FIXED0100,"
        ));
        assert!(err.to_string().ends_with(",ENTIREHOST_X9_50G."));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn create_vnic_with_unset_and_valid_enums_is_valid() {
        let details = CreateInternalVnicDetails {
            internal_pool_name: Some("EXTERNAL".into()),
            service_vnic_type: Some("".into()),
            vnic_shape: Some("".into()),
            ..Default::default()
        };
        assert_eq!(details.validate_enum_value(), Ok(()));
    }

    #[test]
    fn create_vnic_reports_every_bad_enum_in_field_order() {
        let details = CreateInternalVnicDetails {
            internal_pool_name: Some("INTERNAL".into()),
            service_vnic_type: Some("LOADBALANCER".into()),
            vnic_shape: Some("FIXED9999".into()),
            ..Default::default()
        };
        let err = details.validate_enum_value().unwrap_err();
        let lines = lines(&err);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "unsupported enum value for InternalPoolName: INTERNAL. \
             Supported values are: EXTERNAL,SOCI_EGRESS."
        );
        assert_eq!(
            lines[1],
            "unsupported enum value for ServiceVnicType: LOADBALANCER. Supported values are: \
             PRIVATE_ENDPOINT,REVERSE_CONNECTION_ENDPOINT,REAL_VIRTUAL_ROUTER,PRIVATE_DNS_ENDPOINT."
        );
        assert!(lines[2].starts_with("unsupported enum value for VnicShape: FIXED9999."));
    }

    #[test]
    fn available_private_endpoint_is_valid() {
        assert_eq!(available_endpoint().validate_enum_value(), Ok(()));
    }

    #[test]
    fn proxy_types_are_reported_per_element() {
        let config = ReverseConnectionConfiguration {
            proxy_type: Some(vec![
                "DNS".into(),
                "HTTP".into(),
                "SCAN".into(),
                "QUIC".into(),
            ]),
            default_dns_resolution_context: Some(DefaultDnsResolutionContext::Service.into()),
            default_dns_context_transport: Some(DefaultDnsContextTransport::Udp.into()),
            lifecycle_state: Some("".into()),
            ..Default::default()
        };
        let err = config.validate_enum_value().unwrap_err();
        let lines = lines(&err);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("unsupported enum value for ProxyType: HTTP."));
        assert!(lines[1].starts_with("unsupported enum value for ProxyType: QUIC."));
        assert!(lines[1].ends_with("Supported values are: DNS,SCAN."));
    }

    // Registry properties

    #[test]
    fn vnic_shape_table_is_complete_and_unique() {
        assert_eq!(VnicShape::VARIANTS.len(), 867);
        assert_eq!(VnicShape::STRING_VALUES.len(), 867);
        assert_eq!(VnicShape::STRING_VALUES.first(), Some(&"DYNAMIC"));
        assert_eq!(VnicShape::STRING_VALUES.last(), Some(&"ENTIREHOST_X9_50G"));

        let unique: HashSet<&str> = VnicShape::STRING_VALUES.iter().copied().collect();
        assert_eq!(unique.len(), VnicShape::STRING_VALUES.len());

        for shape in VnicShape::VARIANTS {
            assert_eq!(VnicShape::from_wire(shape.as_str()), Some(*shape));
        }
    }

    #[test]
    fn string_values_follow_variant_declaration() {
        fn check<T: StringEnum>() {
            let from_variants: Vec<&str> = T::VARIANTS.iter().map(|v| v.as_str()).collect();
            assert_eq!(from_variants, T::STRING_VALUES, "{}", T::NAME);
        }
        check::<VnicShape>();
        check::<InternalPoolName>();
        check::<ServiceVnicType>();
        check::<PrivateEndpointLifecycleState>();
        check::<ReverseConnectionConfigurationLifecycleState>();
        check::<ProxyType>();
        check::<DefaultDnsResolutionContext>();
        check::<DefaultDnsContextTransport>();
        check::<InternalPublicIpLifetime>();
        check::<InternalPublicIpAssignedEntityType>();
        check::<InternalPublicIpLifecycleState>();
        check::<InternalPublicIpScope>();
    }

    #[test]
    fn lifecycle_orders_differ_between_endpoint_and_reverse_connection() {
        assert_eq!(
            PrivateEndpointLifecycleState::STRING_VALUES,
            &["PROVISIONING", "AVAILABLE", "TERMINATING", "TERMINATED", "UPDATING", "FAILED"]
        );
        assert_eq!(
            ReverseConnectionConfigurationLifecycleState::STRING_VALUES,
            &["PROVISIONING", "AVAILABLE", "UPDATING", "TERMINATING", "TERMINATED", "FAILED"]
        );
    }

    #[test]
    fn every_declared_shape_passes_validation() {
        for literal in VnicShape::STRING_VALUES {
            let details = UpdateVnicShapeDetails {
                vnic_id: "ocid1.vnic.x".to_string(),
                vnic_shape: (*literal).into(),
            };
            assert_eq!(details.validate_enum_value(), Ok(()), "{literal}");
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        for literal in VnicShape::STRING_VALUES {
            let lower = literal.to_lowercase();
            assert!(!VnicShape::is_member(&lower), "{lower}");
            let details = UpdateVnicShapeDetails {
                vnic_id: String::new(),
                vnic_shape: lower.as_str().into(),
            };
            assert!(details.has_invalid_enum_values(), "{lower}");
        }
        assert!(!ProxyType::is_member("Dns"));
        assert!(!InternalPublicIpScope::is_member("Region"));
    }

    // Validation properties

    type Case = (&'static str, Box<dyn ValidateEnumValue>);

    fn case<T: ValidateEnumValue + 'static>(field: &'static str, model: T) -> Case {
        (field, Box::new(model))
    }

    #[test]
    fn single_bad_field_names_field_and_value() {
        let cases: Vec<Case> = vec![
            case(
                "InternalPoolName",
                CreateInternalVnicDetails {
                    internal_pool_name: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "ServiceVnicType",
                CreateInternalVnicDetails {
                    service_vnic_type: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "VnicShape",
                CreateInternalVnicDetails {
                    vnic_shape: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "VnicShape",
                UpdateVnicShapeDetails {
                    vnic_shape: "BOGUS".into(),
                    ..Default::default()
                },
            ),
            case(
                "LifecycleState",
                PrivateEndpoint {
                    lifecycle_state: "BOGUS".into(),
                    ..available_endpoint()
                },
            ),
            case(
                "LifecycleState",
                ReverseConnectionConfiguration {
                    lifecycle_state: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "DefaultDnsResolutionContext",
                ReverseConnectionConfiguration {
                    default_dns_resolution_context: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "DefaultDnsContextTransport",
                EnableReverseConnectionsDetails {
                    default_dns_context_transport: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "ProxyType",
                EnableReverseConnectionsDetails {
                    proxy_type: Some(vec!["BOGUS".into()]),
                    ..Default::default()
                },
            ),
            case(
                "Lifetime",
                InternalPublicIp {
                    lifetime: "BOGUS".into(),
                    ..Default::default()
                },
            ),
            case(
                "AssignedEntityType",
                InternalPublicIp {
                    lifetime: InternalPublicIpLifetime::Reserved.into(),
                    assigned_entity_type: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
            case(
                "Scope",
                InternalPublicIp {
                    scope: Some("BOGUS".into()),
                    ..Default::default()
                },
            ),
        ];

        for (field, model) in cases {
            let err = model.validate_enum_value().unwrap_err();
            assert_eq!(err.len(), 1, "{field}");
            let text = err.to_string();
            assert!(
                text.contains(&format!("unsupported enum value for {field}")),
                "{text}"
            );
            assert!(text.contains("BOGUS"), "{text}");
        }
    }

    #[test]
    fn defaulted_models_are_valid() {
        assert_eq!(CreateInternalVnicDetails::default().validate_enum_value(), Ok(()));
        assert_eq!(UpdateVnicShapeDetails::default().validate_enum_value(), Ok(()));
        assert_eq!(PrivateEndpoint::default().validate_enum_value(), Ok(()));
        assert_eq!(PrivateEndpointAssociation::default().validate_enum_value(), Ok(()));
        assert_eq!(ReverseConnectionConfiguration::default().validate_enum_value(), Ok(()));
        assert_eq!(ReverseConnectionsSourceIpDetails::default().validate_enum_value(), Ok(()));
        assert_eq!(EnableReverseConnectionsDetails::default().validate_enum_value(), Ok(()));
        assert_eq!(InternalPublicIp::default().validate_enum_value(), Ok(()));
    }

    #[test]
    fn public_ip_reports_in_declaration_order() {
        let ip = InternalPublicIp {
            lifetime: "FOREVER".into(),
            assigned_entity_type: Some("INSTANCE".into()),
            lifecycle_state: Some("GONE".into()),
            scope: Some("GLOBAL".into()),
            ..Default::default()
        };
        let fields: Vec<&str> = ip
            .validate_enum_value()
            .unwrap_err()
            .diagnostics()
            .iter()
            .map(|d| d.field)
            .collect();
        assert_eq!(fields, vec!["Lifetime", "AssignedEntityType", "LifecycleState", "Scope"]);
    }

    #[test]
    fn nested_models_are_not_visited() {
        let endpoint = PrivateEndpoint {
            reverse_connection_configuration: Some(ReverseConnectionConfiguration {
                proxy_type: Some(vec!["HTTP".into()]),
                ..Default::default()
            }),
            ..available_endpoint()
        };
        assert_eq!(endpoint.validate_enum_value(), Ok(()));

        let association = PrivateEndpointAssociation {
            reverse_connection_configuration: endpoint.reverse_connection_configuration.clone(),
            ..Default::default()
        };
        assert_eq!(association.validate_enum_value(), Ok(()));
    }

    #[test]
    fn validation_does_not_mutate() {
        let details = CreateInternalVnicDetails {
            vnic_shape: Some("FIXED9999".into()),
            display_name: Some("web".to_string()),
            ..Default::default()
        };
        let before = details.clone();
        let _ = details.validate_enum_value();
        let _ = details.validate_enum_value();
        assert_eq!(details, before);
    }

    // Wire format

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let details = CreateInternalVnicDetails {
            subnet_id: Some("ocid1.subnet.oc1..aaaa".to_string()),
            vnic_shape: Some(VnicShape::Dynamic.into()),
            service_mpls_label: Some(1024),
            is_primary: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "subnetId": "ocid1.subnet.oc1..aaaa",
                "vnicShape": "DYNAMIC",
                "serviceMplsLabel": 1024,
                "isPrimary": false,
            })
        );
    }

    #[test]
    fn mandatory_fields_are_always_serialized() {
        let value = serde_json::to_value(InternalPublicIp::default()).unwrap();
        assert_eq!(value, json!({"compartmentId": "", "id": "", "lifetime": ""}));
    }

    #[test]
    fn empty_tag_maps_are_kept_when_present() {
        let details = CreateInternalVnicDetails {
            freeform_tags: Some(HashMap::new()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&details).unwrap(), json!({"freeformTags": {}}));
    }

    #[test]
    fn private_endpoint_decodes_nested_configuration() {
        let endpoint: PrivateEndpoint = serde_json::from_value(json!({
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "id": "ocid1.privateendpoint.oc1..aaaa",
            "endpointServiceId": "ocid1.endpointservice.oc1..aaaa",
            "vcnId": "ocid1.vcn.oc1..aaaa",
            "subnetId": "ocid1.subnet.oc1..aaaa",
            "privateEndpointVnicId": "ocid1.vnic.oc1..aaaa",
            "privateEndpointIp": "10.0.3.4",
            "lifecycleState": "AVAILABLE",
            "timeCreated": "2016-08-25T21:10:29.600Z",
            "definedTags": {"Operations": {"CostCenter": "42"}},
            "additionalFqdns": ["a.example.com", "b.example.com"],
            "reverseConnectionConfiguration": {
                "lifecycleState": "UPDATING",
                "reverseConnectionsSourceIps": [{"sourceIp": "10.0.0.5"}],
                "proxyType": ["DNS", "SCAN"],
                "customerEndpointsSize": 16
            }
        }))
        .unwrap();

        assert_eq!(
            endpoint.lifecycle_state,
            EnumValue::Known(PrivateEndpointLifecycleState::Available)
        );
        let created: DateTime<Utc> = "2016-08-25T21:10:29.600Z".parse().unwrap();
        assert_eq!(endpoint.time_created, Some(created));
        assert_eq!(created.timestamp_subsec_millis(), 600);
        assert_eq!(
            endpoint.additional_fqdns.as_deref(),
            Some(&["a.example.com".to_string(), "b.example.com".to_string()][..])
        );

        let config = endpoint.reverse_connection_configuration.as_ref().unwrap();
        assert_eq!(
            config.lifecycle_state,
            Some(ReverseConnectionConfigurationLifecycleState::Updating.into())
        );
        assert_eq!(
            config.reverse_connections_source_ips,
            Some(vec![ReverseConnectionsSourceIpDetails {
                source_ip: Some("10.0.0.5".to_string()),
            }])
        );
        assert_eq!(config.customer_endpoints_size, Some(16));
        assert_eq!(config.validate_enum_value(), Ok(()));
        assert_eq!(endpoint.validate_enum_value(), Ok(()));
    }

    #[test]
    fn null_mandatory_fields_decode_as_unset() {
        let body = r#"{
            "id": null,
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "lifecycleState": null
        }"#;
        let endpoint: PrivateEndpoint = crate::from_response_body(body).unwrap();
        assert_eq!(endpoint.id, "");
        assert_eq!(endpoint.compartment_id, "ocid1.compartment.oc1..aaaa");
        assert!(endpoint.lifecycle_state.is_unset());
        assert_eq!(endpoint.validate_enum_value(), Ok(()));

        let absent: PrivateEndpoint =
            crate::from_response_body(r#"{"compartmentId": "ocid1.compartment.oc1..aaaa"}"#)
                .unwrap();
        assert_eq!(endpoint, absent);
    }

    #[test]
    fn null_enum_list_elements_are_unset() {
        let body = r#"{"proxyType": ["DNS", null], "lifecycleState": null}"#;
        let config: ReverseConnectionConfiguration = serde_json::from_str(body).unwrap();
        assert_eq!(
            config.proxy_type,
            Some(vec![ProxyType::Dns.into(), EnumValue::default()])
        );
        assert_eq!(config.validate_enum_value(), Ok(()));

        let body = r#"{"id": null, "compartmentId": null, "lifetime": null}"#;
        let ip: InternalPublicIp = serde_json::from_str(body).unwrap();
        assert_eq!(ip, InternalPublicIp::default());
    }

    #[test]
    fn display_skips_absent_fields() {
        let details = UpdateVnicShapeDetails {
            vnic_id: "ocid1.vnic.x".to_string(),
            vnic_shape: VnicShape::Fixed0040.into(),
        };
        let rendered = details.to_string();
        assert!(rendered.starts_with("UpdateVnicShapeDetails"));
        assert!(rendered.contains("ocid1.vnic.x"));
        assert!(rendered.contains("FIXED0040"));

        let association = PrivateEndpointAssociation {
            endpoint_fqdn: Some("xyz.oraclecloud.com".to_string()),
            ..Default::default()
        };
        let rendered = association.to_string();
        assert!(rendered.contains("xyz.oraclecloud.com"));
        assert!(!rendered.contains("privateEndpointIp"));
        assert!(!rendered.contains("reverseConnectionConfiguration"));
    }
}
