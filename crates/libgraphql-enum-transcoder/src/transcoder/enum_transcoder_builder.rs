use crate::conversion::EnumConversionError;
use crate::conversion::EnumConversions;
use crate::conversion::EnumValueFormats;
use crate::conversion::EnumValueMap;
use crate::schema::SchemaLookup;
use crate::schema::SchemaType;
use crate::transcoder::EnumTranscoder;
use serde_json::Value;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// The declarative part of an [`EnumTranscoder`]'s configuration.
///
/// Unlike serializer and parser functions, this can be loaded from JSON:
///
/// ```json
/// {
///   "enumValueMap": { "Fruit": { "BlueBerry": "BLUE_BERRY" } },
///   "valueFormat": { "client": "PascalCase", "server": "SCREAMING_SNAKE_CASE" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumTranscoderConfig {
    pub enum_value_map: HashMap<String, EnumValueMap>,
    pub value_format: EnumValueFormats,
}

/// Utility for building an [`EnumTranscoder`].
#[derive(Debug)]
pub struct EnumTranscoderBuilder {
    conversions: EnumConversions,
    schema: Arc<dyn SchemaLookup>,
}
impl EnumTranscoderBuilder {
    pub fn new(schema: Arc<dyn SchemaLookup>) -> Self {
        Self {
            conversions: EnumConversions::default(),
            schema,
        }
    }

    /// Build without validating the configured enum names against the schema.
    /// Configuration for names that are not enum types is simply never used.
    pub fn build(self) -> EnumTranscoder {
        EnumTranscoder {
            conversions: self.conversions,
            schema: self.schema,
        }
    }

    /// Build, but first check that every enum name mentioned by the
    /// configuration names an enum type in the schema. All problems are
    /// reported at once.
    pub fn build_strict(self) -> Result<EnumTranscoder, Vec<ConfigValidationError>> {
        let enum_names: BTreeSet<&str> = self.conversions.configured_enum_names().collect();
        let errors: Vec<ConfigValidationError> = enum_names
            .into_iter()
            .filter_map(|enum_name| match self.schema.type_by_name(enum_name) {
                Some(SchemaType::Enum(_)) => None,
                Some(other) => Some(ConfigValidationError::NotAnEnumType {
                    enum_name: enum_name.to_string(),
                    type_kind: other.kind_name(),
                }),
                None => Some(ConfigValidationError::UndefinedEnumType {
                    enum_name: enum_name.to_string(),
                }),
            })
            .collect();

        if errors.is_empty() {
            Ok(self.build())
        } else {
            Err(errors)
        }
    }

    /// Merge a declarative configuration into this builder. Value maps for
    /// the same enum and per-enum format overrides replace earlier ones;
    /// global formats replace earlier ones only when set.
    pub fn config(mut self, config: EnumTranscoderConfig) -> Self {
        let EnumTranscoderConfig { enum_value_map, value_format } = config;
        self.conversions.value_maps.extend(enum_value_map);

        let formats = &mut self.conversions.value_formats;
        if value_format.client.is_some() {
            formats.client = value_format.client;
        }
        if value_format.server.is_some() {
            formats.server = value_format.server;
        }
        formats.client_enums.extend(value_format.client_enums);
        formats.server_enums.extend(value_format.server_enums);
        self
    }

    pub fn enum_value_map(mut self, enum_name: impl Into<String>, map: EnumValueMap) -> Self {
        self.conversions.value_maps.insert(enum_name.into(), map);
        self
    }

    /// Convert server values of `enum_name` to client values with `parser`.
    pub fn parser<F>(mut self, enum_name: impl Into<String>, parser: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, EnumConversionError> + Send + Sync + 'static,
    {
        self.conversions.parsers.insert(enum_name.into(), Arc::new(parser));
        self
    }

    /// Convert client values of `enum_name` to server values with
    /// `serializer`.
    pub fn serializer<F>(mut self, enum_name: impl Into<String>, serializer: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, EnumConversionError> + Send + Sync + 'static,
    {
        self.conversions.serializers.insert(enum_name.into(), Arc::new(serializer));
        self
    }

    pub fn value_formats(mut self, value_formats: EnumValueFormats) -> Self {
        self.conversions.value_formats = value_formats;
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("Conversion configured for `{enum_name}`, which is a {type_kind} type, not an enum")]
    NotAnEnumType {
        enum_name: String,
        type_kind: &'static str,
    },

    #[error("Conversion configured for `{enum_name}`, but the schema defines no such type")]
    UndefinedEnumType {
        enum_name: String,
    },
}
