use crate::ast;

/// Find the operation definition to execute within `document`.
///
/// With an `operation_name`, only the operation of that name matches.
/// Without one, the first operation definition in the document is used.
pub fn find_operation<'doc>(
    document: &'doc ast::operation::Document,
    operation_name: Option<&str>,
) -> Option<&'doc ast::operation::OperationDefinition> {
    let mut operations = document.definitions
        .iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Operation(op_def) => Some(op_def),
            ast::operation::Definition::Fragment(_) => None,
        });

    match operation_name {
        Some(name) => operations.find(|op_def| self::operation_name(op_def) == Some(name)),
        None => operations.next(),
    }
}

pub fn operation_name(op_def: &ast::operation::OperationDefinition) -> Option<&str> {
    match op_def {
        ast::operation::OperationDefinition::Mutation(mutation) => mutation.name.as_deref(),
        ast::operation::OperationDefinition::Query(query) => query.name.as_deref(),
        ast::operation::OperationDefinition::SelectionSet(_) => None,
        ast::operation::OperationDefinition::Subscription(sub) => sub.name.as_deref(),
    }
}

pub fn operation_selection_set(
    op_def: &ast::operation::OperationDefinition,
) -> &ast::operation::SelectionSet {
    match op_def {
        ast::operation::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        ast::operation::OperationDefinition::Query(query) => &query.selection_set,
        ast::operation::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::operation::OperationDefinition::Subscription(sub) => &sub.selection_set,
    }
}

/// Variable definitions of an operation. Shorthand (`{ ... }`) queries
/// cannot declare variables.
pub fn operation_variable_definitions(
    op_def: &ast::operation::OperationDefinition,
) -> &[ast::operation::VariableDefinition] {
    match op_def {
        ast::operation::OperationDefinition::Mutation(mutation) => &mutation.variable_definitions,
        ast::operation::OperationDefinition::Query(query) => &query.variable_definitions,
        ast::operation::OperationDefinition::SelectionSet(_) => &[],
        ast::operation::OperationDefinition::Subscription(sub) => &sub.variable_definitions,
    }
}
