//! Formats the structured responses reported back to the invoking
//! platform.

use crate::job::UpsertOutcome;
use serde::Serialize;
use serde_json::json;

/// Message for the no-risk path.
const HEALTHY: &str = "Vehicle in good health. No maintenance required.";

/// Message for a job write that failed at the store.
const DATABASE_ERROR: &str = "Database error occurred";

/// The handler's structured result: an HTTP-style status code and a
/// JSON-encoded body holding a single message.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// A 200 response wrapping the given message.
    fn ok(message: &str) -> Self {
        Response {
            status_code: 200,
            body: json!({ "message": message }).to_string(),
        }
    }

    /// The response for a healthy vehicle, where no job is recorded.
    pub fn healthy() -> Self {
        Response::ok(HEALTHY)
    }

    /// The response for a job write rejected by the store.
    pub fn database_error() -> Self {
        Response {
            status_code: 500,
            body: json!({ "message": DATABASE_ERROR }).to_string(),
        }
    }
}

impl From<UpsertOutcome> for Response {
    fn from(outcome: UpsertOutcome) -> Self {
        Response::ok(outcome.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_messages_in_a_json_encoded_body() {
        let response = Response::healthy();
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            r#"{"message":"Vehicle in good health. No maintenance required."}"#
        );
    }

    #[test]
    fn maps_upsert_outcomes_to_success_responses() {
        for (outcome, message) in [
            (UpsertOutcome::Created, "Maintenance job created successfully"),
            (UpsertOutcome::Updated, "Maintenance job updated successfully"),
            (UpsertOutcome::Unchanged, "No changes made to maintenance job"),
        ] {
            let response = Response::from(outcome);
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, format!(r#"{{"message":"{}"}}"#, message));
        }
    }

    #[test]
    fn database_errors_map_to_a_generic_500() {
        let response = Response::database_error();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, r#"{"message":"Database error occurred"}"#);
    }

    #[test]
    fn serializes_with_lambda_proxy_field_names() {
        let value = serde_json::to_value(Response::healthy()).unwrap();
        assert!(value.get("statusCode").is_some());
        assert!(value.get("body").is_some());
    }
}
