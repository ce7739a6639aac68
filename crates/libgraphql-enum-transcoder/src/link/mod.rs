mod enum_link;
mod execution_result;
#[allow(clippy::module_inception)]
mod link;
mod operation;

pub use enum_link::EnumLink;
pub use enum_link::LinkState;
pub use enum_link::TranscodedResultStream;
pub use execution_result::ExecutionResult;
pub use execution_result::GraphQLError;
pub use link::Link;
pub use link::LinkChain;
pub use link::LinkError;
pub use link::NextLink;
pub use link::ResultStream;
pub use operation::Operation;
