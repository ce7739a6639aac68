use crate::ast;

/// The kind of an executable operation, used to pick the schema's matching
/// root operation type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::convert::From<&ast::operation::OperationDefinition> for OperationKind {
    fn from(value: &ast::operation::OperationDefinition) -> Self {
        match value {
            ast::operation::OperationDefinition::Mutation(_) => Self::Mutation,
            ast::operation::OperationDefinition::Query(_)
                | ast::operation::OperationDefinition::SelectionSet(_) => Self::Query,
            ast::operation::OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
