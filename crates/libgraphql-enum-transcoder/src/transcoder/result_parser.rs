use crate::ast;
use crate::conversion::ConversionDirection;
use crate::conversion::EnumConversions;
use crate::operation::fragments_by_name;
use crate::operation::operation_selection_set;
use crate::operation::resolve_fragments;
use crate::operation::FieldSelection;
use crate::operation::OperationKind;
use crate::schema::ObjectOrInterfaceType;
use crate::schema::SchemaLookup;
use crate::schema::SchemaType;
use crate::schema::TypeAnnotation;
use crate::transcoder::TranscodeError;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, TranscodeError>;
type FieldTypes = IndexMap<String, TypeAnnotation>;

/// Rewrites the enum values in a response's `data` from their server
/// representation to their client representation.
///
/// The payload is walked along the operation's selections (with fragments
/// flattened) and the schema's output types. Response keys honour aliases.
/// Selections of fields the schema does not declare, and payload values that
/// do not match their declared shape, are left untouched.
#[derive(Clone, Copy, Debug)]
pub struct ResultParser<'a> {
    conversions: &'a EnumConversions,
    schema: &'a dyn SchemaLookup,
}
impl<'a> ResultParser<'a> {
    pub fn new(schema: &'a dyn SchemaLookup, conversions: &'a EnumConversions) -> Self {
        Self {
            conversions,
            schema,
        }
    }

    pub fn parse_data(
        &self,
        document: &ast::operation::Document,
        op_def: &ast::operation::OperationDefinition,
        data: Value,
    ) -> Result<Value> {
        let kind = OperationKind::from(op_def);
        let root_fields = match self.schema.root_type(kind) {
            Some(SchemaType::Object(root_type)) => root_type.fields(),
            _ => {
                log::debug!("Schema defines no {kind} root type; leaving response data untouched.");
                return Ok(data);
            },
        };

        let mut object = match data {
            Value::Object(object) => object,
            other => return Ok(other),
        };

        let fragments = fragments_by_name(document);
        let selections = resolve_fragments(
            &operation_selection_set(op_def).items,
            &fragments,
        )?;

        self.parse_selections(&mut object, root_fields, &selections)?;
        Ok(Value::Object(object))
    }

    fn parse_selections(
        &self,
        object: &mut Map<String, Value>,
        field_types: &FieldTypes,
        selections: &[FieldSelection],
    ) -> Result<()> {
        for selection in selections {
            let Some(field_type) = field_types.get(selection.name()) else {
                continue;
            };
            if let Some(slot) = object.get_mut(selection.response_key()) {
                *slot = self.parse_value(std::mem::take(slot), field_type, selection)?;
            }
        }
        Ok(())
    }

    fn parse_value(
        &self,
        value: Value,
        field_type: &TypeAnnotation,
        selection: &FieldSelection,
    ) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        match field_type {
            TypeAnnotation::NonNull(inner) =>
                self.parse_value(value, inner, selection),

            TypeAnnotation::List(inner) => match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| self.parse_value(item, inner, selection))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array),
                other => Ok(other),
            },

            TypeAnnotation::Named(type_name) => match self.schema.type_by_name(type_name) {
                Some(SchemaType::Enum(enum_type)) => Ok(self.conversions.convert(
                    enum_type.name(),
                    ConversionDirection::Parse,
                    value,
                )?),

                Some(composite_type @ (
                    SchemaType::Interface(_)
                    | SchemaType::Object(_)
                    | SchemaType::Union(_)
                )) => self.parse_composite(value, composite_type, selection),

                Some(_) => Ok(value),

                None => {
                    log::debug!("Leaving value of unknown type `{type_name}` untouched.");
                    Ok(value)
                },
            },
        }
    }

    fn parse_composite(
        &self,
        value: Value,
        composite_type: &'a SchemaType,
        selection: &FieldSelection,
    ) -> Result<Value> {
        let Some(selections) = selection.selection_set() else {
            return Ok(value);
        };
        let mut object = match value {
            Value::Object(object) => object,
            other => return Ok(other),
        };

        let field_types = match composite_type {
            SchemaType::Object(obj_type) => Some(obj_type.fields()),
            SchemaType::Interface(iface_type) => self
                .concrete_type_fields(&object, |obj_type| {
                    obj_type.interfaces().iter().any(|name| name == iface_type.name())
                })
                .or(Some(iface_type.fields())),
            SchemaType::Union(union_type) => self
                .concrete_type_fields(&object, |obj_type| {
                    union_type.members().iter().any(|name| name == obj_type.name())
                }),
            _ => None,
        };

        if let Some(field_types) = field_types {
            self.parse_selections(&mut object, field_types, selections)?;
        }
        Ok(Value::Object(object))
    }

    /// Fields of the object type named by the payload's `__typename`, if it
    /// was selected and names a known object type that `belongs` to the
    /// abstract type being walked.
    fn concrete_type_fields(
        &self,
        object: &Map<String, Value>,
        belongs: impl Fn(&ObjectOrInterfaceType) -> bool,
    ) -> Option<&'a FieldTypes> {
        let type_name = object.get("__typename").and_then(Value::as_str)?;
        match self.schema.type_by_name(type_name).and_then(SchemaType::as_object) {
            Some(obj_type) if belongs(obj_type) => Some(obj_type.fields()),
            Some(_) => {
                log::debug!("`__typename` names `{type_name}`, which is not a possible type here.");
                None
            },
            None => None,
        }
    }
}
