use crate::operation::OperationKind;
use crate::schema::SchemaType;

/// Read-only view of a GraphQL schema, as needed to locate enum-typed
/// positions within variables and responses.
///
/// [`Schema`](crate::schema::Schema) implements this trait, but any other
/// schema representation can be plugged into an
/// [`EnumTranscoder`](crate::EnumTranscoder) by implementing it as well.
pub trait SchemaLookup: std::fmt::Debug + Send + Sync {
    /// Resolve a named type. Returns `None` for names the schema does not
    /// define.
    fn type_by_name(&self, name: &str) -> Option<&SchemaType>;

    /// The name of the root operation type for the given
    /// [`OperationKind`] (if the schema defines one).
    fn root_type_name(&self, kind: OperationKind) -> Option<&str>;

    fn root_type(&self, kind: OperationKind) -> Option<&SchemaType> {
        self.root_type_name(kind)
            .and_then(|name| self.type_by_name(name))
    }
}
