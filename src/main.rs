use anyhow::{anyhow, Result};
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, LambdaEvent};
use maintenance_trigger::{app, client, response::Response, store, trigger::Trigger};

/// Handle one report-upload notification.
async fn function_handler(event: LambdaEvent<S3Event>) -> Result<Response> {
    let trigger = Trigger::from_event(event.payload)?;
    app::current()
        .handle(&trigger, client::current(), store::current())
        .await
}

/// Run an AWS Lambda function that listens to S3 upload events for
/// sensor reports and opens maintenance jobs for vehicles at risk of
/// failure.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;
    store::init(&app::current().settings).await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
