//! Request descriptions for the StoryPath data API.
//!
//! The data API is a PostgREST service exposing two tables, `project` and
//! `location`. Point lookups and project scoping use PostgREST's filter
//! syntax (`?id=eq.7`). This module only *describes* requests: each function
//! returns an [`ApiRequest`] carrying the method, endpoint and JSON body, and
//! the browser client executes it. Keeping the descriptions here lets the
//! wire contract be tested natively.
//!
//! Two rules apply to every mutating request:
//! - the caller's `username` is merged into the JSON body, because the server
//!   enforces row ownership with it;
//! - `POST` and `PATCH` ask for `Prefer: return=representation` so the stored
//!   row (including generated fields such as `id`) comes back in the response.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::RuntimeConfig;
use crate::model::{LocationDraft, ProjectDraft};

pub const PROJECT_PATH: &str = "/project";
pub const LOCATION_PATH: &str = "/location";

/// Errors raised while talking to the data API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// A point lookup matched no row.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// A create/update answered with an empty representation.
    #[error("the server returned no representation")]
    EmptyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Mutating requests carry the owner and ask for the stored row back.
    pub fn returns_representation(self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }
}

/// One request against the data API, independent of any HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, endpoint: String) -> Self {
        Self {
            method,
            endpoint,
            body: None,
        }
    }

    fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    fn with_value(mut self, value: Value) -> Self {
        self.body = Some(value);
        self
    }

    /// Absolute URL for this request.
    pub fn url(&self, config: &RuntimeConfig) -> String {
        format!("{}{}", config.api_base_url.trim_end_matches('/'), self.endpoint)
    }

    /// Headers to send, in order.
    pub fn headers(&self, config: &RuntimeConfig) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Content-Type", "application/json".to_string()),
            ("Authorization", format!("Bearer {}", config.jwt_token)),
        ];
        if self.method.returns_representation() {
            headers.push(("Prefer", "return=representation".to_string()));
        }
        headers
    }

    /// JSON body with the owner's username merged in, if the request has a body.
    pub fn payload(&self, config: &RuntimeConfig) -> Option<Value> {
        let body = self.body.as_ref()?;
        let mut object = match body {
            Value::Object(map) => map.clone(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other.clone());
                map
            }
        };
        object.insert("username".to_string(), Value::String(config.username.clone()));
        Some(Value::Object(object))
    }
}

fn eq_filter(path: &str, field: &str, value: i64) -> String {
    format!("{path}?{field}=eq.{value}")
}

// ========================
// Projects
// ========================

pub fn list_projects() -> ApiRequest {
    ApiRequest::new(Method::Get, PROJECT_PATH.to_string())
}

pub fn get_project(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, eq_filter(PROJECT_PATH, "id", id))
}

pub fn create_project(draft: &ProjectDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, PROJECT_PATH.to_string()).with_body(draft)
}

pub fn update_project(id: i64, draft: &ProjectDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Patch, eq_filter(PROJECT_PATH, "id", id)).with_body(draft)
}

pub fn delete_project(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, eq_filter(PROJECT_PATH, "id", id))
}

// ========================
// Locations
// ========================

pub fn list_locations() -> ApiRequest {
    ApiRequest::new(Method::Get, LOCATION_PATH.to_string())
}

pub fn list_project_locations(project_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, eq_filter(LOCATION_PATH, "project_id", project_id))
}

pub fn get_location(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Get, eq_filter(LOCATION_PATH, "id", id))
}

pub fn create_location(draft: &LocationDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, LOCATION_PATH.to_string()).with_body(draft)
}

pub fn update_location(id: i64, draft: &LocationDraft) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Patch, eq_filter(LOCATION_PATH, "id", id)).with_body(draft)
}

/// Rewrites only the rank of a location; used by reordering.
pub fn update_location_order(id: i64, order: i32) -> ApiRequest {
    ApiRequest::new(Method::Patch, eq_filter(LOCATION_PATH, "id", id))
        .with_value(json!({ "location_order": order }))
}

pub fn delete_location(id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, eq_filter(LOCATION_PATH, "id", id))
}

/// Removes every location of a project; issued before deleting the project.
pub fn delete_project_locations(project_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Delete, eq_filter(LOCATION_PATH, "project_id", project_id))
}

/// Picks the single row out of a PostgREST array response.
pub fn first_row<T>(rows: Vec<T>, resource: &'static str, id: i64) -> Result<T, ApiError> {
    rows.into_iter()
        .next()
        .ok_or(ApiError::NotFound { resource, id })
}

/// Picks the stored representation out of a create/update response.
pub fn representation<T>(rows: Vec<T>) -> Result<T, ApiError> {
    rows.into_iter().next().ok_or(ApiError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HomescreenDisplay, LocationTrigger, ParticipantScoring};
    use pretty_assertions::assert_eq;

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: "https://example.test/api/".to_string(),
            jwt_token: "token-123".to_string(),
            username: "s1234567".to_string(),
        }
    }

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "City Tour".into(),
            description: "d".into(),
            instructions: "walk".into(),
            initial_clue: "start at the gate".into(),
            homescreen_display: HomescreenDisplay::AllLocations,
            participant_scoring: ParticipantScoring::LocationsEntered,
            is_published: false,
        }
    }

    #[test]
    fn get_requests_use_eq_filters() {
        let cfg = config();
        assert_eq!(get_project(7).url(&cfg), "https://example.test/api/project?id=eq.7");
        assert_eq!(
            list_project_locations(7).url(&cfg),
            "https://example.test/api/location?project_id=eq.7"
        );
        assert_eq!(list_projects().method, Method::Get);
        assert_eq!(list_locations().endpoint, "/location");
        assert_eq!(get_location(3).endpoint, "/location?id=eq.3");
    }

    #[test]
    fn reads_do_not_ask_for_representation() {
        let headers = list_projects().headers(&config());
        assert_eq!(
            headers,
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer token-123".to_string()),
            ]
        );
        assert!(list_projects().payload(&config()).is_none());
    }

    #[test]
    fn create_attaches_owner_and_prefer_header() {
        let cfg = config();
        let request = create_project(&draft()).unwrap();
        assert_eq!(request.method, Method::Post);
        assert!(request
            .headers(&cfg)
            .contains(&("Prefer", "return=representation".to_string())));

        let payload = request.payload(&cfg).unwrap();
        assert_eq!(payload["username"], "s1234567");
        assert_eq!(payload["title"], "City Tour");
        assert_eq!(payload["homescreen_display"], "Display all locations");
        assert_eq!(payload["participant_scoring"], "Number of Locations Entered");
    }

    #[test]
    fn update_location_targets_row_by_id() {
        let draft = LocationDraft {
            project_id: 7,
            location_name: "A".into(),
            location_trigger: LocationTrigger::Both,
            location_position: "(0,0)".into(),
            score_points: 5,
            location_order: 2,
            clue: String::new(),
            location_content: "<p>hi</p>".into(),
        };
        let request = update_location(11, &draft).unwrap();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.endpoint, "/location?id=eq.11");

        let payload = request.payload(&config()).unwrap();
        assert_eq!(payload["location_order"], 2);
        assert_eq!(payload["location_trigger"], "Both Location Entry and QR Code Scan");
        assert_eq!(payload["username"], "s1234567");
    }

    #[test]
    fn order_update_only_carries_rank_and_owner() {
        let payload = update_location_order(4, 1).payload(&config()).unwrap();
        assert_eq!(payload, json!({ "location_order": 1, "username": "s1234567" }));
    }

    #[test]
    fn deletes_have_no_body() {
        let cfg = config();
        for request in [delete_project(1), delete_location(2), delete_project_locations(3)] {
            assert_eq!(request.method, Method::Delete);
            assert!(request.payload(&cfg).is_none());
            assert!(!request.headers(&cfg).iter().any(|(name, _)| *name == "Prefer"));
        }
        assert_eq!(delete_project_locations(3).endpoint, "/location?project_id=eq.3");
    }

    #[test]
    fn empty_lookup_is_not_found() {
        let rows: Vec<i64> = Vec::new();
        assert_eq!(
            first_row(rows, "project", 9),
            Err(ApiError::NotFound { resource: "project", id: 9 })
        );
        assert_eq!(representation(Vec::<i64>::new()), Err(ApiError::EmptyResponse));
        assert_eq!(representation(vec![1, 2]), Ok(1));
    }
}
