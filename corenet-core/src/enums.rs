//! Enums - Closed sets of wire literals
//!
//! Every enumeration in the Core Services API is a closed, case-sensitive
//! set of string literals. `string_enum!` declares the typed Rust enum for
//! such a set, and `EnumValue` is what model fields hold: either a known
//! member or the raw wire text that could not be matched.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed set of string literals
///
/// Implemented by `string_enum!`; not meant to be implemented by hand.
pub trait StringEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Rust type name, used in parse errors
    const NAME: &'static str;

    /// Every member exactly once. Callers must not depend on the order.
    const VARIANTS: &'static [Self];

    /// Wire literals in declaration order, as listed in diagnostics
    const STRING_VALUES: &'static [&'static str];

    /// Wire literal of this member
    fn as_str(&self) -> &'static str;

    /// Look up a wire literal. Case-sensitive, no aliases.
    fn from_wire(value: &str) -> Option<Self>;

    /// Returns true if `value` is one of the declared literals
    fn is_member(value: &str) -> bool {
        Self::from_wire(value).is_some()
    }
}

/// Error returned when parsing a literal outside the declared set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a {type_name} value")]
pub struct UnknownEnumValue {
    type_name: &'static str,
    value: String,
}

impl UnknownEnumValue {
    pub fn new<T: StringEnum>(value: impl Into<String>) -> Self {
        Self {
            type_name: T::NAME,
            value: value.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Declare a closed string enumeration.
///
/// Each line maps a variant to its wire literal, in declaration order:
///
/// ```
/// corenet_core::string_enum! {
///     /// Transport used for DNS queries
///     pub enum Transport {
///         Tcp => "TCP",
///         Udp => "UDP",
///     }
/// }
///
/// use corenet_core::StringEnum;
/// assert_eq!(Transport::STRING_VALUES, &["TCP", "UDP"]);
/// assert_eq!("UDP".parse::<Transport>().unwrap(), Transport::Udp);
/// ```
///
/// Serde on the generated type is strict: unknown literals fail to
/// deserialize. Model fields use `EnumValue` instead, which keeps them.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $crate::enums::StringEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)+];
            const STRING_VALUES: &'static [&'static str] = &[$($literal,)+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            fn from_wire(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $($literal => ::std::option::Option::Some(Self::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::StringEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::UnknownEnumValue;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::enums::StringEnum>::from_wire(value)
                    .ok_or_else(|| $crate::enums::UnknownEnumValue::new::<Self>(value))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::enums::StringEnum::as_str(self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                value
                    .parse()
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

/// Value of an enum-typed model field
///
/// The wire format is a plain JSON string. Deserialization accepts any
/// string so that values outside the declared set survive until
/// validation reports them. The empty string and JSON `null` both mean
/// "not supplied".
///
/// Equality and hashing go by wire text, so `Unknown("DNS")` and the
/// `Known` member for `"DNS"` are the same value.
#[derive(Debug, Clone)]
pub enum EnumValue<T> {
    /// A declared member
    Known(T),
    /// Raw wire text that is not a declared member (or is empty)
    Unknown(String),
}

impl<T: StringEnum> EnumValue<T> {
    /// Classify a raw wire literal
    pub fn parse(raw: &str) -> Self {
        match T::from_wire(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unknown(raw.to_string()),
        }
    }

    /// The wire text of this value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value.as_str(),
            Self::Unknown(raw) => raw,
        }
    }

    /// The declared member this value names, if any
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown(raw) => T::from_wire(raw),
        }
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }

    /// Returns true for the empty-string sentinel
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unknown(raw) if raw.is_empty())
    }
}

impl<T: StringEnum> PartialEq for EnumValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: StringEnum> Eq for EnumValue<T> {}

impl<T: StringEnum> Hash for EnumValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<T> Default for EnumValue<T> {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl<T: StringEnum> From<T> for EnumValue<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: StringEnum> From<&str> for EnumValue<T> {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<T: StringEnum> From<String> for EnumValue<T> {
    fn from(raw: String) -> Self {
        match T::from_wire(&raw) {
            Some(value) => Self::Known(value),
            None => Self::Unknown(raw),
        }
    }
}

impl<T: StringEnum> FromStr for EnumValue<T> {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}

impl<T: StringEnum> fmt::Display for EnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: StringEnum> Serialize for EnumValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: StringEnum> Deserialize<'de> for EnumValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(Self::from).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::string_enum! {
        /// Test-only enumeration
        pub enum Transport {
            Tcp => "TCP",
            Udp => "UDP",
            TcpTls => "TCP_TLS",
        }
    }

    #[test]
    fn string_values_keep_declaration_order() {
        assert_eq!(Transport::STRING_VALUES, &["TCP", "UDP", "TCP_TLS"]);
        assert_eq!(Transport::VARIANTS.len(), Transport::STRING_VALUES.len());
        assert_eq!(Transport::NAME, "Transport");
    }

    #[test]
    fn from_wire_is_case_sensitive() {
        assert_eq!(Transport::from_wire("TCP_TLS"), Some(Transport::TcpTls));
        assert_eq!(Transport::from_wire("tcp"), None);
        assert_eq!(Transport::from_wire("Udp"), None);
        assert_eq!(Transport::from_wire(""), None);
        assert!(Transport::is_member("UDP"));
    }

    #[test]
    fn parse_error_names_type_and_value() {
        let err = "QUIC".parse::<Transport>().unwrap_err();
        assert_eq!(err.type_name(), "Transport");
        assert_eq!(err.value(), "QUIC");
        assert_eq!(err.to_string(), "'QUIC' is not a Transport value");
    }

    #[test]
    fn typed_enum_serde_is_strict() {
        assert_eq!(
            serde_json::to_string(&Transport::TcpTls).unwrap(),
            "\"TCP_TLS\""
        );
        assert_eq!(
            serde_json::from_str::<Transport>("\"UDP\"").unwrap(),
            Transport::Udp
        );
        assert!(serde_json::from_str::<Transport>("\"udp\"").is_err());
    }

    #[test]
    fn enum_value_classifies_raw_text() {
        let known: EnumValue<Transport> = "TCP".into();
        assert_eq!(known, EnumValue::Known(Transport::Tcp));
        assert_eq!(known.known(), Some(Transport::Tcp));

        let unknown: EnumValue<Transport> = "tcp".into();
        assert_eq!(unknown, EnumValue::Unknown("tcp".to_string()));
        assert!(!unknown.is_known());
        assert!(!unknown.is_unset());
        assert_eq!(unknown.as_str(), "tcp");
    }

    #[test]
    fn enum_value_default_is_unset() {
        let value: EnumValue<Transport> = EnumValue::default();
        assert!(value.is_unset());
        assert_eq!(value.as_str(), "");
        assert!(EnumValue::<Transport>::parse("").is_unset());
    }

    #[test]
    fn enum_value_serde_keeps_unknown_text() {
        let value: EnumValue<Transport> = serde_json::from_str("\"HTTP\"").unwrap();
        assert_eq!(value, EnumValue::Unknown("HTTP".to_string()));
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"HTTP\"");

        let value: EnumValue<Transport> = serde_json::from_str("\"UDP\"").unwrap();
        assert_eq!(value, EnumValue::Known(Transport::Udp));
        assert_eq!(value.to_string(), "UDP");
    }

    #[test]
    fn enum_value_null_is_unset() {
        let value: EnumValue<Transport> = serde_json::from_str("null").unwrap();
        assert!(value.is_unset());

        let values: Vec<EnumValue<Transport>> = serde_json::from_str(r#"["TCP", null]"#).unwrap();
        assert_eq!(values, vec![Transport::Tcp.into(), EnumValue::default()]);
    }

    #[test]
    fn unknown_holding_a_member_equals_known() {
        let raw: EnumValue<Transport> = EnumValue::Unknown("UDP".to_string());
        assert_eq!(raw, Transport::Udp.into());
        assert_eq!(raw, EnumValue::from("UDP"));
        assert_eq!(raw.known(), Some(Transport::Udp));
        assert!(raw.is_known());

        let mut seen = std::collections::HashSet::new();
        seen.insert(raw);
        assert!(!seen.insert(EnumValue::Known(Transport::Udp)));
        assert_ne!(EnumValue::<Transport>::Unknown("udp".to_string()), Transport::Udp.into());
    }
}
