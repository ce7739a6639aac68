use crate::ast;
use crate::conversion::EnumConversionError;
use crate::conversion::EnumConversions;
use crate::link::ExecutionResult;
use crate::link::GraphQLError;
use crate::link::Operation;
use crate::operation::find_operation;
use crate::operation::operation_variable_definitions;
use crate::operation::FragmentResolutionError;
use crate::schema::SchemaLookup;
use crate::transcoder::EnumTranscoderBuilder;
use crate::transcoder::ResultParser;
use crate::transcoder::VariableSerializer;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, TranscodeError>;

/// Converts enum values in operation variables (client → server) and in
/// result data (server → client) for a single schema.
///
/// An [`EnumTranscoder`] holds only immutable configuration, so one instance
/// (usually behind an [`Arc`]) can serve any number of concurrent
/// operations.
#[derive(Clone, Debug)]
pub struct EnumTranscoder {
    pub(super) conversions: EnumConversions,
    pub(super) schema: Arc<dyn SchemaLookup>,
}
impl EnumTranscoder {
    /// Helper function that just delegates to [`EnumTranscoderBuilder::new()`].
    pub fn builder(schema: Arc<dyn SchemaLookup>) -> EnumTranscoderBuilder {
        EnumTranscoderBuilder::new(schema)
    }

    pub fn conversions(&self) -> &EnumConversions {
        &self.conversions
    }

    pub fn schema(&self) -> &dyn SchemaLookup {
        self.schema.as_ref()
    }

    /// Serialize the variables of the operation named `operation_name` (or the
    /// first operation) in `document`.
    ///
    /// If no matching operation exists the variables are returned as-is.
    pub fn serialize_variables(
        &self,
        document: &ast::operation::Document,
        operation_name: Option<&str>,
        variables: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let Some(op_def) = find_operation(document, operation_name) else {
            return Ok(variables);
        };
        VariableSerializer::new(self.schema(), &self.conversions)
            .serialize_variables(operation_variable_definitions(op_def), variables)
    }

    /// Parse the result `data` of the operation named `operation_name` (or the
    /// first operation) in `document`.
    ///
    /// If no matching operation exists the data is returned as-is.
    pub fn parse_data(
        &self,
        document: &ast::operation::Document,
        operation_name: Option<&str>,
        data: Value,
    ) -> Result<Value> {
        if data.is_null() {
            return Ok(data);
        }
        let Some(op_def) = find_operation(document, operation_name) else {
            log::debug!(
                "No operation definition found for {:?}; leaving response data untouched.",
                operation_name,
            );
            return Ok(data);
        };
        ResultParser::new(self.schema(), &self.conversions)
            .parse_data(document, op_def, data)
    }

    /// Return `operation` with its variables serialized.
    pub fn serialize_operation(&self, mut operation: Operation) -> Result<Operation> {
        let variables = std::mem::take(&mut operation.variables);
        operation.variables = self.serialize_variables(
            &operation.document,
            operation.operation_name.as_deref(),
            variables,
        )?;
        Ok(operation)
    }

    /// Return `result` with its data parsed. Results without data are
    /// returned unchanged.
    ///
    /// A failure to parse the data does not fail the result: the data is
    /// dropped and the failure is appended to the result's `errors` (see
    /// [`GraphQLError::from()`]), keeping any errors already present.
    pub fn parse_result(
        &self,
        operation: &Operation,
        result: ExecutionResult,
    ) -> ExecutionResult {
        let ExecutionResult { data, mut errors, extensions } = result;
        let data = match data {
            Some(data) => match self.parse_data(
                &operation.document,
                operation.operation_name.as_deref(),
                data,
            ) {
                Ok(data) => Some(data),
                Err(err) => {
                    log::warn!(
                        "Dropping result data of operation {:?}: {err}",
                        operation.operation_name,
                    );
                    errors.push(GraphQLError::from(&err));
                    None
                },
            },
            None => None,
        };
        ExecutionResult { data, errors, extensions }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TranscodeError {
    #[error(transparent)]
    Conversion(#[from] EnumConversionError),

    #[error("Unable to resolve fragments of the operation: {0}")]
    FragmentResolution(#[from] FragmentResolutionError),
}
impl TranscodeError {
    /// A stable, machine-readable code for this error, suitable for the
    /// `extensions.code` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Conversion(_) => "ENUM_CONVERSION_FAILED",
            Self::FragmentResolution(_) => "MALFORMED_DOCUMENT",
        }
    }

    /// The enum type whose conversion failed (if known).
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            Self::Conversion(err) => err.enum_name(),
            Self::FragmentResolution(_) => None,
        }
    }
}
