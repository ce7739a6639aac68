use crate::link::ExecutionResult;
use crate::link::Link;
use crate::link::LinkError;
use crate::link::NextLink;
use crate::link::Operation;
use crate::link::ResultStream;
use crate::transcoder::EnumTranscoder;
use futures::stream::FusedStream;
use futures::Stream;
use futures::StreamExt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

/// A [`Link`] that serializes enum values in an operation's variables
/// before forwarding it, and parses enum values in every result that comes
/// back.
///
/// A conversion failure while parsing a result does not end the stream: that
/// one result is replaced by one without data whose `errors` carry the
/// failure, and later results are parsed as usual.
#[derive(Clone, Debug)]
pub struct EnumLink {
    transcoder: Arc<EnumTranscoder>,
}
impl EnumLink {
    pub fn new(transcoder: impl Into<Arc<EnumTranscoder>>) -> Self {
        Self {
            transcoder: transcoder.into(),
        }
    }

    pub fn transcoder(&self) -> &EnumTranscoder {
        &self.transcoder
    }
}
impl Link for EnumLink {
    fn request(&self, operation: Operation, forward: Arc<dyn NextLink>) -> ResultStream {
        Box::pin(TranscodedResultStream::new(self.transcoder.clone(), operation, forward))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LinkState {
    /// Not polled yet. Nothing has been forwarded.
    Idle,

    /// Forwarded, waiting for the first result.
    Pending,

    /// At least one result has been emitted.
    Emitting,

    /// Completed, failed or cancelled. The downstream stream is gone.
    Closed,
}

/// The [`ResultStream`] returned by [`EnumLink`].
///
/// Nothing happens until the stream is first polled. Dropping it releases
/// the downstream stream, if one was started.
pub struct TranscodedResultStream {
    forward: Option<Arc<dyn NextLink>>,
    inner: Option<ResultStream>,
    operation: Operation,
    state: LinkState,
    transcoder: Arc<EnumTranscoder>,
}
impl TranscodedResultStream {
    pub fn new(
        transcoder: Arc<EnumTranscoder>,
        operation: Operation,
        forward: Arc<dyn NextLink>,
    ) -> Self {
        Self {
            forward: Some(forward),
            inner: None,
            operation,
            state: LinkState::Idle,
            transcoder,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    fn close(&mut self) {
        self.state = LinkState::Closed;
        self.forward = None;
        self.inner = None;
    }

    fn start(&mut self) -> Result<(), LinkError> {
        self.state = LinkState::Pending;
        let Some(forward) = self.forward.take() else {
            return Ok(());
        };
        let operation = self.transcoder.serialize_operation(self.operation.clone())?;
        log::trace!(
            "Forwarding operation {:?} with serialized variables.",
            operation.operation_name,
        );
        self.inner = Some(forward.forward(operation)?);
        Ok(())
    }
}
impl Stream for TranscodedResultStream {
    type Item = Result<ExecutionResult, LinkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.state == LinkState::Idle {
            if let Err(err) = this.start() {
                this.close();
                return Poll::Ready(Some(Err(err)));
            }
        }

        let Some(inner) = this.inner.as_mut() else {
            this.close();
            return Poll::Ready(None);
        };

        match inner.poll_next_unpin(cx) {
            Poll::Pending => Poll::Pending,

            Poll::Ready(Some(Ok(result))) => {
                this.state = LinkState::Emitting;
                Poll::Ready(Some(Ok(this.transcoder.parse_result(&this.operation, result))))
            },

            Poll::Ready(Some(Err(err))) => {
                this.close();
                Poll::Ready(Some(Err(err)))
            },

            Poll::Ready(None) => {
                this.close();
                Poll::Ready(None)
            },
        }
    }
}
impl FusedStream for TranscodedResultStream {
    fn is_terminated(&self) -> bool {
        self.state == LinkState::Closed
    }
}
impl std::fmt::Debug for TranscodedResultStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscodedResultStream")
            .field("operation_name", &self.operation.operation_name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
