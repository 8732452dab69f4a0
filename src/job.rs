//! Defines the maintenance job document as stored in the fleet
//! database.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a job. The trigger only ever writes
/// [`JobStatus::Todo`]; the remaining states are advanced by the
/// fleet applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "CANCELLED")]
    Cancelled,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl JobStatus {
    /// The collection's wire name for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Todo => "TODO",
            JobStatus::InProgress => "INPROGRESS",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Completed => "COMPLETED",
        }
    }
}

/// Category of work a job asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "MAINTENANCE")]
    Maintenance,
}

/// A maintenance job document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub assigned_to: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    pub notes: String,
    pub status: JobStatus,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub vehicle_id: ObjectId,
}

impl Job {
    /// Builds the fresh TODO job recorded when a vehicle is flagged
    /// as at risk.
    pub fn open(vehicle_id: ObjectId, assigned_to: ObjectId, created_at: DateTime<Utc>) -> Self {
        Job {
            assigned_to,
            created_at,
            notes: String::new(),
            status: JobStatus::Todo,
            job_type: JobType::Maintenance,
            vehicle_id,
        }
    }
}

/// What the conditional write did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
    Unchanged,
}

impl UpsertOutcome {
    /// Human-readable summary reported back to the invoker.
    pub fn message(&self) -> &'static str {
        match self {
            UpsertOutcome::Created => "Maintenance job created successfully",
            UpsertOutcome::Updated => "Maintenance job updated successfully",
            UpsertOutcome::Unchanged => "No changes made to maintenance job",
        }
    }
}
