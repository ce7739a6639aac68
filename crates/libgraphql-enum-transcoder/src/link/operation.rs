use crate::ast;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;

/// A GraphQL request travelling through a chain of [`Link`](crate::link::Link)s.
///
/// The parsed document is shared so that every link (and every result
/// stream) can walk it without re-parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub document: Arc<ast::operation::Document>,
    pub extensions: Map<String, Value>,
    pub operation_name: Option<String>,
    pub variables: Map<String, Value>,
}
impl Operation {
    pub fn new(document: impl Into<Arc<ast::operation::Document>>) -> Self {
        Self {
            document: document.into(),
            extensions: Map::new(),
            operation_name: None,
            variables: Map::new(),
        }
    }

    /// Parse `query` and wrap it in an [`Operation`] without variables.
    pub fn parse(query: &str) -> Result<Self, ast::operation::ParseError> {
        Ok(Self::new(ast::operation::parse(query)?))
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }
}
