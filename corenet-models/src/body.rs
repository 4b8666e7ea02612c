//! Body - JSON request and response bodies
//!
//! Requests are validated before they are serialized, so a body carrying
//! an undeclared enum literal never leaves the process. Responses are
//! decoded as-is: enum values the service reports are kept even when this
//! crate does not know them yet.

use corenet_core::validation::{EnumValidationError, ValidateEnumValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors from building or decoding a body
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid request body:\n{0}")]
    InvalidEnumValue(#[from] EnumValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validate `request` and serialize it to a JSON string
pub fn to_request_body<T>(request: &T) -> Result<String, BodyError>
where
    T: Serialize + ValidateEnumValue,
{
    request.validate_enum_value()?;
    Ok(serde_json::to_string(request)?)
}

/// Validate `request` and convert it to a JSON value
pub fn to_request_value<T>(request: &T) -> Result<serde_json::Value, BodyError>
where
    T: Serialize + ValidateEnumValue,
{
    request.validate_enum_value()?;
    Ok(serde_json::to_value(request)?)
}

/// Decode a response body without validating it
pub fn from_response_body<T: DeserializeOwned>(body: &str) -> Result<T, BodyError> {
    Ok(serde_json::from_str(body)?)
}
