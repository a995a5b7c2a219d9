use crate::{versions, HandlerError, InvocationContext, Response};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// An event bundled with its context, e.g. captured from a real invocation and saved to a file.
#[derive(Deserialize, Debug)]
struct ReplayPayload {
    event: Value,
    #[serde(alias = "ctx")]
    context: Value,
}

/// Logs the event, the runtime library versions and the context, in that order, then returns the fixed response.
/// Nothing is caught: a serialization failure or an incomplete context is returned as is.
pub fn handle<E>(event: &E, context: &InvocationContext) -> Result<Response, HandlerError>
where
    E: Serialize + ?Sized,
{
    let event = serde_json::to_string_pretty(event).map_err(HandlerError::Serialization)?;
    info!("Event received: {event}");

    for (name, version) in versions::reported() {
        info!("{name} version: {version}");
    }

    context.ensure_complete()?;
    let context = serde_json::to_string_pretty(context).map_err(HandlerError::Serialization)?;
    info!("Context information: {context}");

    Response::success().map_err(HandlerError::Serialization)
}

/// The entry point registered with the Lambda runtime.
/// The runtime turns an `Err` into an invocation error reported to the caller.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (event, ctx) = event.into_parts();
    debug!("Raw context: {:?}", ctx);

    let context = InvocationContext::try_from(&ctx)?;

    Ok(handle(&event, &context)?)
}

/// Runs the handler on a saved `{"event": .., "context": ..}` document for local debugging.
/// `ctx` is accepted in place of `context`.
pub fn replay(payload: &str) -> Result<Response, HandlerError> {
    let payload: ReplayPayload = serde_json::from_str(payload).map_err(HandlerError::Payload)?;
    let context = InvocationContext::from_value(payload.context)?;

    handle(&payload.event, &context)
}
