use crate::HandlerError;
use lambda_runtime::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Names of the fields logged for every invocation, in the order they are logged.
pub const FIELD_NAMES: [&str; 7] = [
    "aws_request_id",
    "log_group_name",
    "log_stream_name",
    "function_name",
    "memory_limit_in_mb",
    "function_version",
    "invoked_function_arn",
];

/// A flat summary of the invocation context.
/// `lambda_runtime::Context` nests half of these under `env_config`, so they are lifted out for logging.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub aws_request_id: String,
    pub log_group_name: String,
    pub log_stream_name: String,
    pub function_name: String,
    pub memory_limit_in_mb: i32,
    pub function_version: String,
    pub invoked_function_arn: String,
}

impl InvocationContext {
    /// Builds the summary from a JSON object, e.g. the `context` part of a replay payload.
    /// A key that is missing or null is reported by name rather than as a generic deserialization error.
    pub fn from_value(value: Value) -> Result<Self, HandlerError> {
        if let Some(fields) = value.as_object() {
            if let Some(name) = FIELD_NAMES
                .iter()
                .find(|name| fields.get(**name).map_or(true, Value::is_null))
            {
                return Err(HandlerError::MissingContextField(*name));
            }
        }

        let context: Self = serde_json::from_value(value).map_err(HandlerError::Payload)?;
        context.ensure_complete()?;

        Ok(context)
    }

    /// Returns an error naming the first field that was not supplied by the host.
    /// The runtime fills unset values with defaults, so an empty string or a zero memory limit means absent.
    pub fn ensure_complete(&self) -> Result<(), HandlerError> {
        let absent = [
            ("aws_request_id", self.aws_request_id.is_empty()),
            ("log_group_name", self.log_group_name.is_empty()),
            ("log_stream_name", self.log_stream_name.is_empty()),
            ("function_name", self.function_name.is_empty()),
            ("memory_limit_in_mb", self.memory_limit_in_mb <= 0),
            ("function_version", self.function_version.is_empty()),
            ("invoked_function_arn", self.invoked_function_arn.is_empty()),
        ];

        match absent.into_iter().find(|(_, is_absent)| *is_absent) {
            Some((name, _)) => Err(HandlerError::MissingContextField(name)),
            None => Ok(()),
        }
    }
}

impl TryFrom<&Context> for InvocationContext {
    type Error = HandlerError;

    fn try_from(ctx: &Context) -> Result<Self, Self::Error> {
        let context = Self {
            aws_request_id: ctx.request_id.clone(),
            log_group_name: ctx.env_config.log_group.clone(),
            log_stream_name: ctx.env_config.log_stream.clone(),
            function_name: ctx.env_config.function_name.clone(),
            memory_limit_in_mb: ctx.env_config.memory,
            function_version: ctx.env_config.version.clone(),
            invoked_function_arn: ctx.invoked_function_arn.clone(),
        };
        context.ensure_complete()?;

        Ok(context)
    }
}
