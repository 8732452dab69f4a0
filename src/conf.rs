//! Defines configuration as read from the environment.

use serde::Deserialize;

/// Default `job_collection` value.
fn default_job_collection() -> String {
    String::from("Job")
}

/// Default `default_assignee` value: the operations account that new
/// maintenance jobs are opened under unless overridden.
fn default_default_assignee() -> String {
    String::from("6537c7b54a4588f9fd2ff8aa")
}

/// The trigger is configured to read sensor reports from S3 and
/// record maintenance jobs in MongoDB. The configuration must be
/// given as environment variables.
#[derive(Deserialize)]
pub struct Settings {
    /// Connection string for the MongoDB deployment holding the fleet
    /// database.
    pub atlas_uri: String,

    /// Name of the database holding the job collection.
    pub db_name: String,

    /// Name of the collection that maintenance jobs are written to.
    #[serde(default = "default_job_collection")]
    pub job_collection: String,

    /// Readings strictly above this value flag the vehicle as at risk
    /// of failure. Omitting this makes any positive reading risky.
    #[serde(default)]
    pub failure_threshold: f64,

    /// Hex object id of the user that new maintenance jobs are
    /// assigned to.
    #[serde(default = "default_default_assignee")]
    pub default_assignee: String,
}
