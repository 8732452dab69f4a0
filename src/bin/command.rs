use anyhow::{Context, Result};
use maintenance_trigger::{app, client, store, trigger::Trigger};
use std::env::var;

/// Run the maintenance trigger once against a single stored report,
/// without a surrounding Lambda event, and print the structured
/// response.
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

    let bucket = var("BUCKET").context("BUCKET is required")?;
    let key = var("KEY").context("KEY is required")?;
    let trigger = Trigger { bucket, key };

    let response = app::current()
        .handle(&trigger, client::current(), store::current())
        .await
        .with_context(|| format!("Failed to handle trigger {:?}", &trigger))?;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
