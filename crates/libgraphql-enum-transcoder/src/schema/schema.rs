use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookup;
use crate::schema::SchemaType;
use inherent::inherent;
use std::collections::HashMap;

/// An immutable index of the named types in a GraphQL schema along with its
/// root operation types.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, SchemaType>,
}
impl Schema {
    /// Returns a [`HashMap<String, SchemaType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalars (`Boolean`, `Float`, `ID`,
    /// `Int`, `String`).
    pub fn all_types(&self) -> &HashMap<String, SchemaType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }
}

#[inherent]
impl SchemaLookup for Schema {
    pub fn type_by_name(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }
}
