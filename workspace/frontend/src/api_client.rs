pub mod goal;
pub mod note;
pub mod task;

use common::{Goal, GoalUpdate, MutationResponse, NewGoal, Note, NotePayload, RecordId, Task, TaskPayload};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::settings::AppSettings;

/// Failure of one API request. Every variant counts as a failed operation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The REST endpoints the dashboard talks to.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;
    /// Returns the new id when the server reports one.
    async fn create_task(&self, payload: &TaskPayload) -> ApiResult<Option<RecordId>>;
    async fn update_task(&self, id: RecordId, payload: &TaskPayload) -> ApiResult<()>;
    async fn delete_task(&self, id: RecordId) -> ApiResult<()>;
    async fn toggle_task(&self, id: RecordId) -> ApiResult<()>;

    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, payload: &NotePayload) -> ApiResult<Option<RecordId>>;
    async fn update_note(&self, id: RecordId, payload: &NotePayload) -> ApiResult<()>;
    async fn delete_note(&self, id: RecordId) -> ApiResult<()>;

    async fn list_goals(&self) -> ApiResult<Vec<Goal>>;
    async fn create_goal(&self, payload: &NewGoal) -> ApiResult<Option<RecordId>>;
    async fn update_goal(&self, id: RecordId, payload: &GoalUpdate) -> ApiResult<()>;
    async fn delete_goal(&self, id: RecordId) -> ApiResult<()>;
}

/// [`DashboardApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!("API client for {} (timeout {:?})", base_url, timeout);
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_settings(settings: &AppSettings) -> ApiResult<Self> {
        Self::new(settings.api_base_url.as_str(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn transport_error(&self, method: &str, endpoint: &str, e: reqwest::Error) -> ApiError {
        let error = if e.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Transport(e)
        };
        tracing::error!("{} {} - {}", method, endpoint, error);
        error
    }

    fn check_status(&self, method: &str, endpoint: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if !status.is_success() {
            let error = ApiError::Status(status.as_u16());
            tracing::error!("{} {} - {}", method, endpoint, error);
            return Err(error);
        }
        Ok(response)
    }

    /// Common GET request handler
    pub async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET request to: {}", self.url(endpoint));

        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| self.transport_error("GET", endpoint, e))?;
        let response = self.check_status("GET", endpoint, response)?;

        tracing::trace!("GET {} - Response received, parsing JSON", endpoint);
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error("GET", endpoint, e))?;
        let data = serde_json::from_slice(&body).map_err(|e| {
            let error = ApiError::Decode(e.to_string());
            tracing::error!("GET {} - {}", endpoint, error);
            error
        })?;

        tracing::info!("GET {} - Success", endpoint);
        Ok(data)
    }

    /// Common POST request handler; `body` is sent as JSON when present.
    pub async fn post<B>(&self, endpoint: &str, body: Option<&B>) -> ApiResult<MutationResponse>
    where
        B: Serialize,
    {
        tracing::debug!("POST request to: {}", self.url(endpoint));
        let mut request = self.client.post(self.url(endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send_write("POST", endpoint, request).await
    }

    /// Common PUT request handler
    pub async fn put<B>(&self, endpoint: &str, body: &B) -> ApiResult<MutationResponse>
    where
        B: Serialize,
    {
        tracing::debug!("PUT request to: {}", self.url(endpoint));
        let request = self.client.put(self.url(endpoint)).json(body);
        self.send_write("PUT", endpoint, request).await
    }

    /// Common DELETE request handler
    pub async fn delete(&self, endpoint: &str) -> ApiResult<MutationResponse> {
        tracing::debug!("DELETE request to: {}", self.url(endpoint));
        let request = self.client.delete(self.url(endpoint));
        self.send_write("DELETE", endpoint, request).await
    }

    /// Any 2xx counts as success. The body is optional; a missing or
    /// foreign body reads as a bare acknowledgement.
    async fn send_write(
        &self,
        method: &str,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<MutationResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(method, endpoint, e))?;
        let response = self.check_status(method, endpoint, response)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(method, endpoint, e))?;
        let ack = serde_json::from_slice::<MutationResponse>(&body).unwrap_or_else(|_| {
            tracing::trace!("{} {} - No acknowledgement body", method, endpoint);
            MutationResponse::ok()
        });

        tracing::info!("{} {} - Success", method, endpoint);
        Ok(ack)
    }
}

impl DashboardApi for HttpApiClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        task::get_tasks(self).await
    }

    async fn create_task(&self, payload: &TaskPayload) -> ApiResult<Option<RecordId>> {
        task::create_task(self, payload).await
    }

    async fn update_task(&self, id: RecordId, payload: &TaskPayload) -> ApiResult<()> {
        task::update_task(self, id, payload).await
    }

    async fn delete_task(&self, id: RecordId) -> ApiResult<()> {
        task::delete_task(self, id).await
    }

    async fn toggle_task(&self, id: RecordId) -> ApiResult<()> {
        task::toggle_task(self, id).await
    }

    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        note::get_notes(self).await
    }

    async fn create_note(&self, payload: &NotePayload) -> ApiResult<Option<RecordId>> {
        note::create_note(self, payload).await
    }

    async fn update_note(&self, id: RecordId, payload: &NotePayload) -> ApiResult<()> {
        note::update_note(self, id, payload).await
    }

    async fn delete_note(&self, id: RecordId) -> ApiResult<()> {
        note::delete_note(self, id).await
    }

    async fn list_goals(&self) -> ApiResult<Vec<Goal>> {
        goal::get_goals(self).await
    }

    async fn create_goal(&self, payload: &NewGoal) -> ApiResult<Option<RecordId>> {
        goal::create_goal(self, payload).await
    }

    async fn update_goal(&self, id: RecordId, payload: &GoalUpdate) -> ApiResult<()> {
        goal::update_goal(self, id, payload).await
    }

    async fn delete_goal(&self, id: RecordId) -> ApiResult<()> {
        goal::delete_goal(self, id).await
    }
}
