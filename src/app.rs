//! Defines the read-only application state and hub for utility
//! functions.

use crate::client;
use crate::conf::Settings;
use crate::job::Job;
use crate::key;
use crate::payload;
use crate::response::Response;
use crate::store;
use crate::trigger::Trigger;
use anyhow::{anyhow, Context, Result};
use bson::oid::ObjectId;
use chrono::Utc;
use envy::from_env;
use once_cell::sync::OnceCell;
use tracing::{error, info, instrument};

/// An App is an initialized application state, derived from
/// settings. This is only useful to pre-compute stuff that will be
/// used constantly.
pub struct App {
    /// The original settings.
    pub settings: Settings,

    /// The user that new maintenance jobs are assigned to.
    pub default_assignee: ObjectId,
}

impl App {
    /// Initialize an App instance given a settings struct. Consumes
    /// the settings struct.
    pub fn new(settings: Settings) -> Result<Self> {
        let default_assignee = ObjectId::parse_str(&settings.default_assignee).with_context(
            || format!("Invalid default assignee {:?}", settings.default_assignee),
        )?;
        Ok(App {
            settings,
            default_assignee,
        })
    }

    /// Whether a sensor reading flags the vehicle as at risk of
    /// failure. Readings equal to the threshold are not risky.
    pub fn at_risk(&self, reading: f64) -> bool {
        reading > self.settings.failure_threshold
    }

    /// Handle an invocation trigger: fetch the report it names,
    /// evaluate it, and record a maintenance job if warranted.
    #[instrument(skip(self, client, jobs))]
    pub async fn handle(
        &self,
        trigger: &Trigger,
        client: &aws_sdk_s3::Client,
        jobs: &mongodb::Collection<Job>,
    ) -> Result<Response> {
        let object = client::fetch(client, &trigger.bucket, &trigger.key).await?;
        info!(
            "Fetched object {:?} from bucket {:?} with content type {:?}",
            &trigger.key, &trigger.bucket, object.content_type
        );

        let reading = payload::first_reading(&object.body)
            .with_context(|| format!("Failed to decode report {:?}", &trigger.key))?;
        info!(
            "First reading is {}, failure threshold is {}",
            reading, self.settings.failure_threshold
        );
        if !self.at_risk(reading) {
            return Ok(Response::healthy());
        }

        let vehicle_id = key::vehicle_id(&trigger.key)
            .with_context(|| format!("Failed to identify the vehicle for report {:?}", &trigger.key))?;
        let job = Job::open(vehicle_id, self.default_assignee, Utc::now());
        match store::upsert_todo_job(jobs, &job).await {
            Ok(outcome) => {
                info!("{}", outcome.message());
                Ok(Response::from(outcome))
            }
            Err(e) => {
                error!(
                    "Failed to record a maintenance job for vehicle {}: {:?}",
                    vehicle_id, e
                );
                Ok(Response::database_error())
            }
        }
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env()?;
    let app = App::new(settings)?;
    CURRENT
        .set(app)
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(failure_threshold: f64) -> Settings {
        Settings {
            atlas_uri: String::from("mongodb://localhost:27017"),
            db_name: String::from("GreengrassIot"),
            job_collection: String::from("Job"),
            failure_threshold,
            default_assignee: String::from("6537c7b54a4588f9fd2ff8aa"),
        }
    }

    #[test]
    fn readings_above_the_threshold_are_risky() {
        let app = App::new(settings(0.5)).unwrap();
        assert!(app.at_risk(0.9));
        assert!(app.at_risk(0.500001));
    }

    #[test]
    fn readings_at_or_below_the_threshold_are_not_risky() {
        let app = App::new(settings(0.5)).unwrap();
        assert!(!app.at_risk(0.5));
        assert!(!app.at_risk(0.1));
        assert!(!app.at_risk(-3.0));
    }

    #[test]
    fn the_default_threshold_flags_any_positive_reading() {
        let app = App::new(settings(0.0)).unwrap();
        assert!(app.at_risk(0.000001));
        assert!(!app.at_risk(0.0));
    }

    #[test]
    fn rejects_a_malformed_assignee_id() {
        let mut bad = settings(0.5);
        bad.default_assignee = String::from("not-a-hex-id");
        assert!(App::new(bad).is_err());
    }
}
