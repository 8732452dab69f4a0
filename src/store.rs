//! Defines the global handle on the maintenance job collection.

use crate::conf::Settings;
use crate::job::{Job, JobStatus, UpsertOutcome};
use anyhow::{anyhow, Context, Result};
use bson::{doc, Bson};
use mongodb::options::UpdateOptions;
use mongodb::{Client, Collection};
use once_cell::sync::OnceCell;

/// Classifies an upsert by what the store reports it did.
fn classify(upserted_id: Option<&Bson>, modified_count: u64) -> UpsertOutcome {
    if upserted_id.is_some() {
        UpsertOutcome::Created
    } else if modified_count > 0 {
        UpsertOutcome::Updated
    } else {
        UpsertOutcome::Unchanged
    }
}

/// Records a maintenance job, reusing the open TODO job for the same
/// vehicle if one exists. The match-then-set runs atomically in the
/// store, so concurrent invocations for one vehicle cannot open
/// duplicate jobs.
pub async fn upsert_todo_job(
    jobs: &Collection<Job>,
    job: &Job,
) -> mongodb::error::Result<UpsertOutcome> {
    let result = jobs
        .update_one(
            doc! { "vehicleId": job.vehicle_id, "status": JobStatus::Todo.as_str() },
            doc! { "$set": bson::to_document(job)? },
            UpdateOptions::builder().upsert(true).build(),
        )
        .await?;
    Ok(classify(result.upserted_id.as_ref(), result.modified_count))
}

/// Global job collection instance.
static CURRENT: OnceCell<Collection<Job>> = OnceCell::new();

/// Initialize the global job collection handle. The driver owns the
/// connection pool, which lives as long as the process does.
pub async fn init(settings: &Settings) -> Result<()> {
    let client = Client::with_uri_str(&settings.atlas_uri)
        .await
        .context("Failed to build a MongoDB client from ATLAS_URI")?;
    let jobs = client
        .database(&settings.db_name)
        .collection::<Job>(&settings.job_collection);
    CURRENT
        .set(jobs)
        .map_err(|_| anyhow!("store::CURRENT was already initialized"))
}

/// Get the current job collection instance, or panic if it hasn't
/// been initialized.
pub fn current() -> &'static Collection<Job> {
    CURRENT.get().expect("store is not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn an_inserted_document_counts_as_created() {
        let id = Bson::ObjectId(ObjectId::new());
        assert_eq!(classify(Some(&id), 0), UpsertOutcome::Created);
    }

    #[test]
    fn a_rewritten_document_counts_as_updated() {
        assert_eq!(classify(None, 1), UpsertOutcome::Updated);
    }

    #[test]
    fn a_matched_identical_document_counts_as_unchanged() {
        assert_eq!(classify(None, 0), UpsertOutcome::Unchanged);
    }
}
