//! Browser client for the StoryPath data API.
//!
//! Request shapes come from `common::api`; this module only executes them
//! with `gloo-net` and decodes the PostgREST responses. Any non-success status
//! becomes an [`ApiError`] for the caller to report.

use std::rc::Rc;

use common::api::{self, ApiError, ApiRequest, Method};
use common::config::RuntimeConfig;
use common::model::{Location, LocationDraft, Project, ProjectDraft};
use common::mutation::{StepError, Steps};
use gloo_net::http::{Method as HttpMethod, RequestBuilder, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: Rc<RuntimeConfig>,
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    }
}

impl ApiClient {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    async fn send(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let mut builder = RequestBuilder::new(&request.url(&self.config))
            .method(http_method(request.method));
        for (name, value) in request.headers(&self.config) {
            builder = builder.header(name, &value);
        }

        let sent = match request.payload(&self.config) {
            Some(body) => {
                let body =
                    serde_json::to_string(&body).map_err(|e| ApiError::Encode(e.to_string()))?;
                builder
                    .body(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                body,
            });
        }
        Ok(response)
    }

    async fn rows<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<Vec<T>, ApiError> {
        self.send(request)
            .await?
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ========================
    // Projects
    // ========================

    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.rows(&api::list_projects()).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let rows = self.rows(&api::get_project(id)).await?;
        api::first_row(rows, "project", id)
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let rows = self.rows(&api::create_project(draft)?).await?;
        api::representation(rows)
    }

    pub async fn update_project(&self, id: i64, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let rows = self.rows(&api::update_project(id, draft)?).await?;
        api::representation(rows)
    }

    /// Deletes the project's locations first, then the project itself.
    ///
    /// A failure reports whether the locations were already gone.
    pub async fn delete_project(&self, id: i64) -> Result<(), StepError<ApiError>> {
        let mut steps = Steps::new();
        steps.commit(self.send(&api::delete_project_locations(id)).await)?;
        steps.commit(self.send(&api::delete_project(id)).await)?;
        Ok(())
    }

    // ========================
    // Locations
    // ========================

    pub async fn list_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.rows(&api::list_locations()).await
    }

    pub async fn list_project_locations(&self, project_id: i64) -> Result<Vec<Location>, ApiError> {
        self.rows(&api::list_project_locations(project_id)).await
    }

    pub async fn get_location(&self, id: i64) -> Result<Location, ApiError> {
        let rows = self.rows(&api::get_location(id)).await?;
        api::first_row(rows, "location", id)
    }

    pub async fn create_location(&self, draft: &LocationDraft) -> Result<Location, ApiError> {
        let rows = self.rows(&api::create_location(draft)?).await?;
        api::representation(rows)
    }

    pub async fn update_location(
        &self,
        id: i64,
        draft: &LocationDraft,
    ) -> Result<Location, ApiError> {
        let rows = self.rows(&api::update_location(id, draft)?).await?;
        api::representation(rows)
    }

    pub async fn update_location_order(&self, id: i64, order: i32) -> Result<(), ApiError> {
        self.send(&api::update_location_order(id, order)).await?;
        Ok(())
    }

    pub async fn delete_location(&self, id: i64) -> Result<(), ApiError> {
        self.send(&api::delete_location(id)).await?;
        Ok(())
    }
}
