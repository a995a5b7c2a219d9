use invocation_logger::{function_handler, init_tracing};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(None);

    lambda_runtime::run(service_fn(function_handler)).await?;

    Ok(())
}
