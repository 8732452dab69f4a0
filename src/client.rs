//! Defines the global S3 client.

use anyhow::{anyhow, Context, Result};
use aws_config::from_env;
use aws_sdk_s3::Client;
use once_cell::sync::OnceCell;
use std::env;

/// An object fetched from storage: its raw contents plus the content
/// type declared by the store.
#[derive(Debug)]
pub struct FetchedObject {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Downloads a single object from storage into memory.
pub async fn fetch(client: &Client, bucket: &str, key: &str) -> Result<FetchedObject> {
    let response = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .with_context(|| format!("Failed to fetch object {:?} from bucket {:?}", key, bucket))?;
    let content_type = response.content_type().map(String::from);
    let body = response
        .body
        .collect()
        .await
        .with_context(|| {
            format!(
                "Failed to read the contents of object {:?} from bucket {:?}",
                key, bucket
            )
        })?
        .into_bytes()
        .to_vec();
    Ok(FetchedObject { body, content_type })
}

/// Global S3 client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Initialize the global S3 client.
pub async fn init() -> Result<()> {
    let endpoint_url_var = env::var("AWS_ENDPOINT_URL");
    let s3_config = if let Ok(endpoint_url) = endpoint_url_var {
        from_env()
            .endpoint_url(
                if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
                    endpoint_url
                } else {
                    format!("https://{}", endpoint_url)
                },
            )
            .region("us-east-1") // should be OK since the endpoint was overridden
            .load()
    } else {
        from_env().load()
    }
    .await;
    let client = Client::new(&s3_config);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current S3 client instance, or panic if it hasn't been initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}
