use crate::transcoder::TranscodeError;
use serde_json::Map;
use serde_json::Value;

/// One result of an operation: the single response of a query or mutation,
/// or one event of a subscription.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
}
impl ExecutionResult {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn with_error(mut self, error: GraphQLError) -> Self {
        self.errors.push(error);
        self
    }
}

/// A GraphQL error as it appears in a response's `errors` list.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extensions: Map<String, Value>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// The `extensions.code` of this error (if it is a string).
    pub fn code(&self) -> Option<&str> {
        self.extensions.get("code").and_then(Value::as_str)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions.insert("code".to_string(), Value::String(code.into()));
        self
    }
}
impl From<&TranscodeError> for GraphQLError {
    fn from(err: &TranscodeError) -> Self {
        let mut error = GraphQLError::new(err.to_string()).with_code(err.code());
        if let Some(enum_name) = err.enum_name() {
            error.extensions.insert("enumName".to_string(), Value::String(enum_name.to_string()));
        }
        error
    }
}
