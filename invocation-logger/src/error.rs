use thiserror::Error;

/// Failures of a single invocation. None of them are retried; they are returned to the runtime as is.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event or the context summary has no JSON representation.
    #[error("failed to serialize invocation data: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The invocation context does not carry one of the fields the summary is built from.
    #[error("invocation context is missing `{0}`")]
    MissingContextField(&'static str),

    /// A replay payload is not a valid `{"event": .., "context": ..}` document.
    #[error("invalid replay payload: {0}")]
    Payload(#[source] serde_json::Error),
}
