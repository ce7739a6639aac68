use crate::ast;

/// Represents the annotated type of a field, input field, or variable
/// definition.
///
/// Unlike the `graphql_parser` AST type this is detached from any source
/// document, so it can be stored in a [`Schema`](crate::schema::Schema) and
/// shared freely.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast_type(inner))),

            ast::operation::Type::NamedType(name) =>
                Self::Named(name.to_string()),

            ast::operation::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }

    pub fn list(inner: impl Into<TypeAnnotation>) -> Self {
        Self::List(Box::new(inner.into()))
    }

    pub fn non_null(inner: impl Into<TypeAnnotation>) -> Self {
        Self::NonNull(Box::new(inner.into()))
    }
}
impl std::convert::From<&ast::operation::Type> for TypeAnnotation {
    fn from(value: &ast::operation::Type) -> Self {
        Self::from_ast_type(value)
    }
}
impl std::convert::From<&str> for TypeAnnotation {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
