use crate::link::ExecutionResult;
use crate::link::GraphQLError;
use crate::link::Operation;
use crate::transcoder::TranscodeError;
use futures::stream::BoxStream;
use std::sync::Arc;
use thiserror::Error;

/// The results of one operation.
///
/// Each `Ok` item is a result ("next"), an `Err` item is a terminal error,
/// and the end of the stream is completion. Dropping the stream before it
/// ends unsubscribes from the operation.
pub type ResultStream = BoxStream<'static, Result<ExecutionResult, LinkError>>;

/// A middleware step between a client and the transport that executes
/// operations.
pub trait Link: Send + Sync {
    /// Handle `operation`, using `forward` to pass it on to the rest of the
    /// chain.
    fn request(&self, operation: Operation, forward: Arc<dyn NextLink>) -> ResultStream;
}

/// The remainder of a link chain, as seen by a [`Link`].
pub trait NextLink: Send + Sync {
    fn forward(&self, operation: Operation) -> Result<ResultStream, LinkError>;
}
impl<F> NextLink for F
where
    F: Fn(Operation) -> Result<ResultStream, LinkError> + Send + Sync,
{
    fn forward(&self, operation: Operation) -> Result<ResultStream, LinkError> {
        self(operation)
    }
}

/// A [`Link`] composed with the [`NextLink`] it forwards to, which is itself
/// usable as the next link of another [`Link`].
#[derive(Clone)]
pub struct LinkChain {
    link: Arc<dyn Link>,
    next: Arc<dyn NextLink>,
}
impl LinkChain {
    pub fn new(link: Arc<dyn Link>, next: Arc<dyn NextLink>) -> Self {
        Self { link, next }
    }

    pub fn execute(&self, operation: Operation) -> ResultStream {
        self.link.request(operation, self.next.clone())
    }
}
impl NextLink for LinkChain {
    fn forward(&self, operation: Operation) -> Result<ResultStream, LinkError> {
        Ok(self.execute(operation))
    }
}
impl std::fmt::Debug for LinkChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkChain").finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Error)]
pub enum LinkError {
    /// Errors reported by the downstream result stream.
    #[error("Downstream error: {}", .0.message)]
    Downstream(GraphQLError),

    /// The operation could not be handed to the next link.
    #[error("Failed to forward the operation: {0}")]
    Forward(Arc<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Transcode(#[from] TranscodeError),
}
impl LinkError {
    pub fn forward(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Forward(Arc::new(err))
    }
}
