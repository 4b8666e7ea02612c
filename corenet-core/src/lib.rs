//! Corenet Core
//!
//! Building blocks shared by the generated Core Services API models:
//! closed string enumerations, the enum validation contract and the
//! debug rendering used by every model.

pub mod de;
pub mod enums;
pub mod render;
pub mod tags;
pub mod validation;

pub use enums::{EnumValue, StringEnum, UnknownEnumValue};
pub use validation::{EnumValidationError, EnumValidator, EnumValueNotSupported, ValidateEnumValue};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
