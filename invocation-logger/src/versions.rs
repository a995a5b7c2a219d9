//! Versions of the runtime libraries this function is built against.
//! Resolved from Cargo.lock by `build.rs`.

/// The Lambda runtime that drives the invocation loop.
pub const LAMBDA_RUNTIME_VERSION: &str = env!("LAMBDA_RUNTIME_VERSION");

/// The HTTP client the runtime talks to the Lambda Runtime API with.
pub const LAMBDA_RUNTIME_API_CLIENT_VERSION: &str = env!("LAMBDA_RUNTIME_API_CLIENT_VERSION");

/// (library name, version) pairs in the order they are logged.
pub fn reported() -> [(&'static str, &'static str); 2] {
    [
        ("lambda_runtime", LAMBDA_RUNTIME_VERSION),
        ("lambda_runtime_api_client", LAMBDA_RUNTIME_API_CLIENT_VERSION),
    ]
}
