use crate::ast;
use crate::schema::EnumType;
use crate::schema::InputObjectType;
use crate::schema::ObjectOrInterfaceType;
use crate::schema::ScalarType;
use crate::schema::Schema;
use crate::schema::SchemaType;
use crate::schema::TypeAnnotation;
use crate::schema::UnionType;
use graphql_parser::Pos;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// Type extensions are collected while loading and merged into their target
/// types by [`SchemaBuilder::build()`], so an extension may appear before the
/// type it extends.
///
/// # Example
///
/// ```
/// use libgraphql_enum_transcoder::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), libgraphql_enum_transcoder::schema::SchemaBuildError> {
/// let schema = SchemaBuilder::from_str("enum Fruit { Apple }")?
///     .load_str("type Query { fruit: Fruit }")?
///     .build()?;
///
/// assert!(schema.all_types().contains_key("Fruit"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    type_extensions: Vec<ast::schema::TypeExtension>,
    types: HashMap<String, SchemaType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(content: &str) -> Result<Self> {
        Self::new().load_str(content)
    }

    pub fn load_str(self, content: &str) -> Result<Self> {
        let doc = ast::schema::parse(content)
            .map_err(SchemaBuildError::ParseError)?;
        self.load_ast(doc)
    }

    pub fn load_ast(mut self, doc: ast::schema::Document) -> Result<Self> {
        for def in doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_def(schema_def)?,

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_type_def(type_def)?,

                ast::schema::Definition::TypeExtension(ext) =>
                    self.type_extensions.push(ext),

                // Directives play no part in locating enum values.
                ast::schema::Definition::DirectiveDefinition(_) => (),
            }
        }
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        for ext in std::mem::take(&mut self.type_extensions) {
            self.merge_type_extension(ext)?;
        }

        for scalar_name in BUILTIN_SCALAR_NAMES {
            self.types
                .entry(scalar_name.to_string())
                .or_insert_with(|| SchemaType::Scalar(ScalarType {
                    name: scalar_name.to_string(),
                }));
        }

        let query_type = self.query_type.take()
            .or_else(|| self.default_root_type_name("Query"));
        let mutation_type = self.mutation_type.take()
            .or_else(|| self.default_root_type_name("Mutation"));
        let subscription_type = self.subscription_type.take()
            .or_else(|| self.default_root_type_name("Subscription"));

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    fn default_root_type_name(&self, name: &str) -> Option<String> {
        match self.types.get(name) {
            Some(SchemaType::Object(_)) => Some(name.to_string()),
            _ => None,
        }
    }

    fn insert_type(&mut self, position: Pos, schema_type: SchemaType) -> Result<()> {
        let type_name = schema_type.name().to_string();
        if self.types.contains_key(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                location: position,
            });
        }
        self.types.insert(type_name, schema_type);
        Ok(())
    }

    fn merge_type_extension(&mut self, ext: ast::schema::TypeExtension) -> Result<()> {
        use graphql_parser::schema::TypeExtension as Ext;

        let (type_name, position) = match &ext {
            Ext::Enum(e) => (e.name.to_string(), e.position),
            Ext::InputObject(e) => (e.name.to_string(), e.position),
            Ext::Interface(e) => (e.name.to_string(), e.position),
            Ext::Object(e) => (e.name.to_string(), e.position),
            Ext::Scalar(e) => (e.name.to_string(), e.position),
            Ext::Union(e) => (e.name.to_string(), e.position),
        };

        let Some(target) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                location: position,
            });
        };

        match (target, ext) {
            (SchemaType::Enum(enum_type), Ext::Enum(ext)) => {
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                );
                Ok(())
            },

            (SchemaType::InputObject(input_type), Ext::InputObject(ext)) =>
                merge_fields(
                    &type_name,
                    &mut input_type.fields,
                    ext.fields.iter().map(|f| (f.name.as_str(), f.position, &f.value_type)),
                ),

            (SchemaType::Interface(iface_type), Ext::Interface(ext)) =>
                merge_fields(
                    &type_name,
                    &mut iface_type.fields,
                    ext.fields.iter().map(|f| (f.name.as_str(), f.position, &f.field_type)),
                ),

            (SchemaType::Object(obj_type), Ext::Object(ext)) => {
                obj_type.interfaces.extend(ext.implements_interfaces.iter().cloned());
                merge_fields(
                    &type_name,
                    &mut obj_type.fields,
                    ext.fields.iter().map(|f| (f.name.as_str(), f.position, &f.field_type)),
                )
            },

            (SchemaType::Scalar(_), Ext::Scalar(_)) => Ok(()),

            (SchemaType::Union(union_type), Ext::Union(ext)) => {
                union_type.members.extend(ext.types);
                Ok(())
            },

            (target, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: target.kind_name(),
                location: position,
            }),
        }
    }

    fn visit_schema_def(&mut self, schema_def: ast::schema::SchemaDefinition) -> Result<()> {
        if self.query_type.is_some()
            || self.mutation_type.is_some()
            || self.subscription_type.is_some() {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                location: schema_def.position,
            });
        }
        self.query_type = schema_def.query;
        self.mutation_type = schema_def.mutation;
        self.subscription_type = schema_def.subscription;
        Ok(())
    }

    fn visit_type_def(&mut self, type_def: ast::schema::TypeDefinition) -> Result<()> {
        use graphql_parser::schema::TypeDefinition as Def;

        match type_def {
            Def::Enum(def) => self.insert_type(def.position, SchemaType::Enum(EnumType {
                name: def.name,
                values: def.values.into_iter().map(|value| value.name).collect(),
            })),

            Def::InputObject(def) => {
                let mut fields = IndexMap::new();
                merge_fields(
                    &def.name,
                    &mut fields,
                    def.fields.iter().map(|f| (f.name.as_str(), f.position, &f.value_type)),
                )?;
                self.insert_type(def.position, SchemaType::InputObject(InputObjectType {
                    fields,
                    name: def.name,
                }))
            },

            Def::Interface(def) => {
                let mut fields = IndexMap::new();
                merge_fields(
                    &def.name,
                    &mut fields,
                    def.fields.iter().map(|f| (f.name.as_str(), f.position, &f.field_type)),
                )?;
                self.insert_type(def.position, SchemaType::Interface(ObjectOrInterfaceType {
                    fields,
                    interfaces: def.implements_interfaces,
                    name: def.name,
                }))
            },

            Def::Object(def) => {
                let mut fields = IndexMap::new();
                merge_fields(
                    &def.name,
                    &mut fields,
                    def.fields.iter().map(|f| (f.name.as_str(), f.position, &f.field_type)),
                )?;
                self.insert_type(def.position, SchemaType::Object(ObjectOrInterfaceType {
                    fields,
                    interfaces: def.implements_interfaces,
                    name: def.name,
                }))
            },

            Def::Scalar(def) => self.insert_type(def.position, SchemaType::Scalar(ScalarType {
                name: def.name,
            })),

            Def::Union(def) => self.insert_type(def.position, SchemaType::Union(UnionType {
                members: def.types,
                name: def.name,
            })),
        }
    }
}

fn merge_fields<'a>(
    type_name: &str,
    target: &mut IndexMap<String, TypeAnnotation>,
    fields: impl Iterator<Item = (&'a str, Pos, &'a ast::schema::Type)>,
) -> Result<()> {
    for (field_name, position, field_type) in fields {
        if target.contains_key(field_name) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
                location: position,
            });
        }
        target.insert(field_name.to_string(), TypeAnnotation::from_ast_type(field_type));
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple definitions of field `{type_name}.{field_name}` (second at {location})")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: Pos,
    },

    #[error("Multiple `schema` definitions found (second at {location})")]
    DuplicateSchemaDefinition {
        location: Pos,
    },

    #[error("Multiple definitions of type `{type_name}` (second at {location})")]
    DuplicateTypeDefinition {
        type_name: String,
        location: Pos,
    },

    #[error("Extension of undefined type `{type_name}` at {location}")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: Pos,
    },

    #[error("Extension at {location} does not match the kind of `{type_name}` ({type_kind})")]
    InvalidExtensionType {
        type_name: String,
        type_kind: &'static str,
        location: Pos,
    },

    #[error("Error parsing schema document: {0}")]
    ParseError(ast::schema::ParseError),
}
