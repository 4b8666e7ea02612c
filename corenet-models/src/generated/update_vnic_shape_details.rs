//! UpdateVnicShapeDetails model for the Core Services API
//!
//! DO NOT EDIT MANUALLY - regenerate with corenet-codegen

use std::fmt;

use corenet_core::enums::EnumValue;
use corenet_core::render;
use corenet_core::validation::{EnumValidationError, EnumValidator, ValidateEnumValue};
use serde::{Deserialize, Serialize};

use super::VnicShape;

/// Request body for changing the shape of a VNIC in its VNIC attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateVnicShapeDetails {
    /// OCID of the VNIC whose attachments move to the new shape.
    #[serde(deserialize_with = "corenet_core::de::null_as_default")]
    pub vnic_id: String,

    /// Shape the VNIC attachment is updated to.
    pub vnic_shape: EnumValue<VnicShape>,
}

impl fmt::Display for UpdateVnicShapeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_record(f, "UpdateVnicShapeDetails", self)
    }
}

impl ValidateEnumValue for UpdateVnicShapeDetails {
    fn validate_enum_value(&self) -> Result<(), EnumValidationError> {
        EnumValidator::new()
            .check("VnicShape", Some(&self.vnic_shape))
            .finish()
    }
}
