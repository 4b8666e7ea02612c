//! Validation - Enum membership checks for model fields
//!
//! Each model with enum-typed fields walks them in declaration order,
//! collecting one diagnostic per value outside its declared set. The
//! empty string means "not supplied" and is never reported.

use std::fmt;

use crate::enums::{EnumValue, StringEnum};

/// A single enum-typed field (or list element) holding an undeclared value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unsupported enum value for {field}: {value}. Supported values are: {}.",
    .supported.join(",")
)]
pub struct EnumValueNotSupported {
    /// Field name as declared on the model (e.g., "VnicShape")
    pub field: &'static str,
    /// Offending wire text
    pub value: String,
    /// Declared literals, in declaration order
    pub supported: &'static [&'static str],
}

/// Composite failure: every diagnostic found on one model, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValidationError {
    diagnostics: Vec<EnumValueNotSupported>,
}

impl EnumValidationError {
    pub fn diagnostics(&self) -> &[EnumValueNotSupported] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<EnumValueNotSupported> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for EnumValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for EnumValidationError {}

/// Models whose enum-typed fields can be checked before building a request
pub trait ValidateEnumValue {
    /// Returns every unsupported enum value on this model.
    ///
    /// Pure: never mutates the model, never fails for any other reason.
    /// Nested models are not visited; each model checks its own fields.
    fn validate_enum_value(&self) -> Result<(), EnumValidationError>;

    /// Returns true if at least one enum-typed field is unsupported
    fn has_invalid_enum_values(&self) -> bool {
        self.validate_enum_value().is_err()
    }
}

/// Accumulates diagnostics across the enum-typed fields of a model
#[derive(Debug, Default)]
pub struct EnumValidator {
    diagnostics: Vec<EnumValueNotSupported>,
}

impl EnumValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a single field. `None` and the empty string are accepted.
    pub fn check<T: StringEnum>(
        mut self,
        field: &'static str,
        value: Option<&EnumValue<T>>,
    ) -> Self {
        if let Some(value) = value {
            self.record::<T>(field, value.as_str());
        }
        self
    }

    /// Check every element of a list field, in list order
    pub fn check_each<T: StringEnum>(
        mut self,
        field: &'static str,
        values: &[EnumValue<T>],
    ) -> Self {
        for value in values {
            self.record::<T>(field, value.as_str());
        }
        self
    }

    pub fn finish(self) -> Result<(), EnumValidationError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(EnumValidationError {
                diagnostics: self.diagnostics,
            })
        }
    }

    fn record<T: StringEnum>(&mut self, field: &'static str, raw: &str) {
        if raw.is_empty() || T::is_member(raw) {
            return;
        }
        self.diagnostics.push(EnumValueNotSupported {
            field,
            value: raw.to_string(),
            supported: T::STRING_VALUES,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::string_enum! {
        pub enum Color {
            Red => "RED",
            Green => "GREEN",
        }
    }

    crate::string_enum! {
        pub enum Size {
            Small => "SMALL",
            Large => "LARGE",
        }
    }

    #[test]
    fn diagnostic_text_is_exact() {
        let diagnostic = EnumValueNotSupported {
            field: "Color",
            value: "BLUE".to_string(),
            supported: Color::STRING_VALUES,
        };
        assert_eq!(
            diagnostic.to_string(),
            "unsupported enum value for Color: BLUE. Supported values are: RED,GREEN."
        );
    }

    #[test]
    fn valid_and_missing_values_pass() {
        let red: EnumValue<Color> = Color::Red.into();
        let unset: EnumValue<Size> = EnumValue::default();
        let result = EnumValidator::new()
            .check("Color", Some(&red))
            .check("Size", Some(&unset))
            .check::<Size>("Other", None)
            .finish();
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn diagnostics_follow_check_order() {
        let color: EnumValue<Color> = "red".into();
        let size: EnumValue<Size> = "HUGE".into();
        let err = EnumValidator::new()
            .check("Color", Some(&color))
            .check("Size", Some(&size))
            .finish()
            .unwrap_err();

        assert_eq!(err.len(), 2);
        assert_eq!(err.diagnostics()[0].field, "Color");
        assert_eq!(err.diagnostics()[1].field, "Size");
        assert_eq!(
            err.to_string(),
            "unsupported enum value for Color: red. Supported values are: RED,GREEN.\n\
             unsupported enum value for Size: HUGE. Supported values are: SMALL,LARGE."
        );
    }

    #[test]
    fn list_elements_are_reported_individually() {
        let values: Vec<EnumValue<Color>> = vec![
            "RED".into(),
            "BLUE".into(),
            "".into(),
            "GREEN".into(),
            "PINK".into(),
        ];
        let err = EnumValidator::new()
            .check_each("Color", &values)
            .finish()
            .unwrap_err();

        let offending: Vec<&str> = err
            .diagnostics()
            .iter()
            .map(|d| d.value.as_str())
            .collect();
        assert_eq!(offending, vec!["BLUE", "PINK"]);
    }

    #[test]
    fn unknown_variant_holding_a_member_is_accepted() {
        let value: EnumValue<Color> = EnumValue::Unknown("GREEN".to_string());
        assert!(
            EnumValidator::new()
                .check("Color", Some(&value))
                .finish()
                .is_ok()
        );
    }
}
