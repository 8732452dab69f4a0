//! Defines a _trigger_, the input for one handler invocation. The
//! trigger is built from the S3 event announcing an uploaded sensor
//! report.

use anyhow::{anyhow, Context, Result};
use aws_lambda_events::event::s3::S3Event;
use percent_encoding::percent_decode_str;

/// The storage object the handler works on.
#[derive(Debug)]
pub struct Trigger {
    /// The bucket holding the uploaded report.
    pub bucket: String,

    /// The decoded key of the uploaded report.
    pub key: String,
}

/// Decodes an object key as it appears in an S3 event: percent
/// escapes resolve to UTF-8, and `+` encodes a space.
fn decode_key(raw: &str) -> Result<String> {
    let unplussed = raw.replace('+', " ");
    let decoded = percent_decode_str(&unplussed)
        .decode_utf8()
        .with_context(|| format!("Object key {:?} is not UTF-8 once decoded", raw))?;
    Ok(decoded.into_owned())
}

impl Trigger {
    /// Builds a trigger from the first record of an S3 event.
    pub fn from_event(event: S3Event) -> Result<Self> {
        let record = event
            .records
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("S3 event carries no records"))?;
        let bucket = record
            .s3
            .bucket
            .name
            .ok_or_else(|| anyhow!("S3 event record names no bucket"))?;
        let raw_key = record
            .s3
            .object
            .key
            .ok_or_else(|| anyhow!("S3 event record names no object key"))?;
        let key = decode_key(&raw_key)?;
        Ok(Trigger { bucket, key })
    }
}
