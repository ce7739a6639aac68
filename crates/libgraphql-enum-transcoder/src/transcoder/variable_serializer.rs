use crate::ast;
use crate::conversion::ConversionDirection;
use crate::conversion::EnumConversions;
use crate::schema::SchemaLookup;
use crate::schema::SchemaType;
use crate::schema::TypeAnnotation;
use crate::transcoder::TranscodeError;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, TranscodeError>;

/// Rewrites the enum values held by an operation's variables from their
/// client representation to their server representation.
///
/// Variables are walked along their declared types. Values that do not match
/// their declared shape, and types the schema does not know about, are left
/// untouched.
#[derive(Clone, Copy, Debug)]
pub struct VariableSerializer<'a> {
    conversions: &'a EnumConversions,
    schema: &'a dyn SchemaLookup,
}
impl<'a> VariableSerializer<'a> {
    pub fn new(schema: &'a dyn SchemaLookup, conversions: &'a EnumConversions) -> Self {
        Self {
            conversions,
            schema,
        }
    }

    /// Serialize every variable in `variables` that has a definition in
    /// `variable_definitions`. Variables without a provided value stay
    /// absent.
    pub fn serialize_variables(
        &self,
        variable_definitions: &[ast::operation::VariableDefinition],
        mut variables: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        for var_def in variable_definitions {
            if let Some(value) = variables.get_mut(var_def.name.as_str()) {
                *value = self.serialize_variable(std::mem::take(value), &var_def.var_type)?;
            }
        }
        Ok(variables)
    }

    /// Serialize a single value against a variable's declared type.
    pub fn serialize_variable(
        &self,
        value: Value,
        var_type: &ast::operation::Type,
    ) -> Result<Value> {
        match var_type {
            ast::operation::Type::NonNullType(inner) =>
                self.serialize_variable(value, inner),

            ast::operation::Type::ListType(inner) => match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| self.serialize_variable(item, inner))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array),
                other => Ok(other),
            },

            ast::operation::Type::NamedType(type_name) =>
                self.serialize_named_type(value, type_name),
        }
    }

    fn serialize_named_type(&self, value: Value, type_name: &str) -> Result<Value> {
        match self.schema.type_by_name(type_name) {
            Some(schema_type) if schema_type.is_input_type() =>
                self.serialize_schema_type(value, schema_type),

            Some(schema_type) => {
                log::debug!(
                    "Leaving value of non-input {} type `{type_name}` untouched.",
                    schema_type.kind_name(),
                );
                Ok(value)
            },

            None => {
                log::debug!("Leaving value of unknown type `{type_name}` untouched.");
                Ok(value)
            },
        }
    }

    fn serialize_schema_type(&self, value: Value, schema_type: &SchemaType) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        match schema_type {
            SchemaType::Enum(enum_type) => Ok(self.conversions.convert(
                enum_type.name(),
                ConversionDirection::Serialize,
                value,
            )?),

            SchemaType::InputObject(input_type) => match value {
                Value::Object(fields) => fields
                    .into_iter()
                    .map(|(key, field_value)| {
                        let field_value = match input_type.fields().get(key.as_str()) {
                            Some(field_type) => self.serialize_input_value(field_value, field_type)?,
                            None => field_value,
                        };
                        Ok((key, field_value))
                    })
                    .collect::<Result<Map<_, _>>>()
                    .map(Value::Object),
                other => Ok(other),
            },

            _ => Ok(value),
        }
    }

    fn serialize_input_value(&self, value: Value, field_type: &TypeAnnotation) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        match field_type {
            TypeAnnotation::NonNull(inner) =>
                self.serialize_input_value(value, inner),

            TypeAnnotation::List(inner) => match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| self.serialize_input_value(item, inner))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array),
                other => Ok(other),
            },

            TypeAnnotation::Named(type_name) =>
                self.serialize_named_type(value, type_name),
        }
    }
}
