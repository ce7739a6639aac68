#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_lookup;
mod schema_type;
mod type_annotation;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use schema_lookup::SchemaLookup;
pub use schema_type::EnumType;
pub use schema_type::InputObjectType;
pub use schema_type::ObjectOrInterfaceType;
pub use schema_type::ScalarType;
pub use schema_type::SchemaType;
pub use schema_type::UnionType;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
