mod field_selection;
mod fragment_resolver;
mod operation_definition;
mod operation_kind;

pub use field_selection::FieldSelection;
pub use fragment_resolver::fragments_by_name;
pub use fragment_resolver::resolve_fragments;
pub use fragment_resolver::FragmentMap;
pub use fragment_resolver::FragmentResolutionError;
pub use fragment_resolver::MAX_EXPANDED_SELECTIONS;
pub use fragment_resolver::MAX_EXPANSION_ROUNDS;
pub use fragment_resolver::MAX_SELECTION_DEPTH;
pub use operation_definition::find_operation;
pub use operation_definition::operation_name;
pub use operation_definition::operation_selection_set;
pub use operation_definition::operation_variable_definitions;
pub use operation_kind::OperationKind;
