use crate::conversion::EnumValueFormat;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// A caller-supplied conversion for the values of one enum type.
///
/// Serialize functions receive client-side values and return server-side
/// values; parse functions do the reverse. Returning an error fails the
/// conversion of the value (see [`EnumConversionError`]).
pub type EnumConversionFn =
    Arc<dyn Fn(&Value) -> Result<Value, EnumConversionError> + Send + Sync>;

/// Which way a value travels through the transcoder.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConversionDirection {
    /// Server representation to client representation (responses).
    Parse,

    /// Client representation to server representation (variables).
    Serialize,
}

/// Mapping of client-side enum values to their server-side values for a
/// single enum type.
///
/// The same map serves both directions: serializing looks up the client
/// value's key, parsing looks up the key whose server value matches. If
/// several keys share a server value, parsing resolves to the first of them
/// in insertion order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct EnumValueMap(IndexMap<String, Value>);
impl EnumValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, client_value: impl Into<String>, server_value: impl Into<Value>) {
        self.0.insert(client_value.into(), server_value.into());
    }

    /// The client value mapped to `server_value`, if any.
    pub fn client_value(&self, server_value: &Value) -> Option<&str> {
        self.0.iter()
            .find(|(_, mapped)| *mapped == server_value)
            .map(|(client_value, _)| client_value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The server value mapped from `client_value`, if any.
    pub fn server_value(&self, client_value: &str) -> Option<&Value> {
        self.0.get(client_value)
    }
}
impl<K: Into<String>, V: Into<Value>> std::iter::FromIterator<(K, V)> for EnumValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Naming conventions used on each side of the wire.
///
/// `client` and `server` apply to every enum type unless `client_enums` or
/// `server_enums` carries an override for that type's name.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumValueFormats {
    pub client: Option<EnumValueFormat>,
    pub client_enums: HashMap<String, EnumValueFormat>,
    pub server: Option<EnumValueFormat>,
    pub server_enums: HashMap<String, EnumValueFormat>,
}
impl EnumValueFormats {
    /// The convention that values of `enum_name` are converted *into* when
    /// travelling in `direction`: the server's when serializing, the
    /// client's when parsing.
    pub fn target_format(
        &self,
        enum_name: &str,
        direction: ConversionDirection,
    ) -> Option<EnumValueFormat> {
        let (overrides, global) = match direction {
            ConversionDirection::Parse => (&self.client_enums, self.client),
            ConversionDirection::Serialize => (&self.server_enums, self.server),
        };
        overrides.get(enum_name).copied().or(global)
    }

    pub(crate) fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.client_enums.keys()
            .chain(self.server_enums.keys())
            .map(String::as_str)
    }
}

/// The conversion selected for one enum type and direction by
/// [`EnumConversions::resolve()`].
pub enum EnumConversion<'a> {
    Function(&'a EnumConversionFn),
    Identity,
    ValueFormat(EnumValueFormat),
    ValueMap {
        direction: ConversionDirection,
        map: &'a EnumValueMap,
    },
}
impl EnumConversion<'_> {
    pub fn apply(&self, value: Value) -> Result<Value, EnumConversionError> {
        match self {
            Self::Function(func) => func(&value),

            Self::Identity => Ok(value),

            Self::ValueFormat(format) => Ok(match value {
                Value::String(s) => Value::String(format.convert(s.as_str())),
                other => other,
            }),

            Self::ValueMap { direction: ConversionDirection::Serialize, map } => {
                let mapped = value.as_str().and_then(|client_value| map.server_value(client_value));
                Ok(match mapped {
                    Some(server_value) => server_value.clone(),
                    None => value,
                })
            },

            Self::ValueMap { direction: ConversionDirection::Parse, map } =>
                Ok(match map.client_value(&value) {
                    Some(client_value) => Value::String(client_value.to_string()),
                    None => value,
                }),
        }
    }
}
impl std::fmt::Debug for EnumConversion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Identity => f.write_str("Identity"),
            Self::ValueFormat(format) => f.debug_tuple("ValueFormat").field(format).finish(),
            Self::ValueMap { direction, map } => f.debug_struct("ValueMap")
                .field("direction", direction)
                .field("map", map)
                .finish(),
        }
    }
}

/// Every configured way of converting enum values, keyed by enum type name.
#[derive(Clone, Default)]
pub struct EnumConversions {
    pub(crate) parsers: HashMap<String, EnumConversionFn>,
    pub(crate) serializers: HashMap<String, EnumConversionFn>,
    pub(crate) value_formats: EnumValueFormats,
    pub(crate) value_maps: HashMap<String, EnumValueMap>,
}
impl EnumConversions {
    /// Convert a single value of `enum_name`.
    ///
    /// `null` is returned untouched without consulting any conversion.
    pub fn convert(
        &self,
        enum_name: &str,
        direction: ConversionDirection,
        value: Value,
    ) -> Result<Value, EnumConversionError> {
        if value.is_null() {
            return Ok(value);
        }
        self.resolve(enum_name, direction)
            .apply(value)
            .map_err(|err| err.with_enum_name(enum_name))
    }

    /// Pick the conversion for `enum_name` in `direction`.
    ///
    /// Explicit functions take precedence over value maps, which take
    /// precedence over naming conventions. Without any of those the value is
    /// left as it is.
    pub fn resolve(&self, enum_name: &str, direction: ConversionDirection) -> EnumConversion<'_> {
        self.resolve_function(enum_name, direction)
            .or_else(|| self.resolve_value_map(enum_name, direction))
            .or_else(|| self.resolve_value_format(enum_name, direction))
            .unwrap_or(EnumConversion::Identity)
    }

    pub fn resolve_function(
        &self,
        enum_name: &str,
        direction: ConversionDirection,
    ) -> Option<EnumConversion<'_>> {
        let functions = match direction {
            ConversionDirection::Parse => &self.parsers,
            ConversionDirection::Serialize => &self.serializers,
        };
        functions.get(enum_name).map(EnumConversion::Function)
    }

    pub fn resolve_value_map(
        &self,
        enum_name: &str,
        direction: ConversionDirection,
    ) -> Option<EnumConversion<'_>> {
        self.value_maps
            .get(enum_name)
            .map(|map| EnumConversion::ValueMap { direction, map })
    }

    pub fn resolve_value_format(
        &self,
        enum_name: &str,
        direction: ConversionDirection,
    ) -> Option<EnumConversion<'_>> {
        self.value_formats
            .target_format(enum_name, direction)
            .map(EnumConversion::ValueFormat)
    }

    /// Names of every enum type this configuration mentions explicitly.
    pub(crate) fn configured_enum_names(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys()
            .chain(self.serializers.keys())
            .chain(self.value_maps.keys())
            .map(String::as_str)
            .chain(self.value_formats.enum_names())
    }
}
impl std::fmt::Debug for EnumConversions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumConversions")
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .field("serializers", &self.serializers.keys().collect::<Vec<_>>())
            .field("value_formats", &self.value_formats)
            .field("value_maps", &self.value_maps)
            .finish()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EnumConversionError {
    #[error("Failed to convert a value of enum `{enum_name}`: {source}")]
    InEnum {
        enum_name: String,
        source: Box<EnumConversionError>,
    },

    #[error("{0}")]
    Message(String),

    #[error("Unable to convert value {value} of enum `{enum_name}`")]
    UnconvertibleValue {
        enum_name: String,
        value: Value,
    },
}
impl EnumConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn unconvertible(enum_name: impl Into<String>, value: Value) -> Self {
        Self::UnconvertibleValue {
            enum_name: enum_name.into(),
            value,
        }
    }

    /// Attach the name of the enum type being converted, unless the error
    /// already names one.
    pub fn with_enum_name(self, enum_name: &str) -> Self {
        match self {
            Self::Message(_) => Self::InEnum {
                enum_name: enum_name.to_string(),
                source: Box::new(self),
            },
            named => named,
        }
    }

    /// The enum type this error concerns (if known).
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            Self::InEnum { enum_name, .. }
                | Self::UnconvertibleValue { enum_name, .. } => Some(enum_name.as_str()),
            Self::Message(_) => None,
        }
    }
}
