//! HTTP access to the remote notes API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::{ApiError, ApiOperation, ApiResult};
use crate::config::Config;
use crate::models::{DeleteAck, Note, NoteDraft};

/// Requests the client can make against the notes API
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET /notes`, or `GET /notes?search=<term>` when a term is given
    async fn list_notes(&self, search: Option<&str>) -> ApiResult<Vec<Note>>;

    /// `POST /notes`
    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note>;

    /// `GET /notes/{noteId}`
    async fn get_note(&self, note_id: &str) -> ApiResult<Note>;

    /// `PUT /notes/{noteId}`, replacing title and content
    async fn update_note(&self, note_id: &str, draft: &NoteDraft) -> ApiResult<Note>;

    /// `DELETE /notes/{noteId}`
    async fn delete_note(&self, note_id: &str) -> ApiResult<DeleteAck>;
}

/// `NotesApi` over reqwest
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: Url,
}

impl HttpNotesApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, config.api_base_url()?))
    }

    /// `base_url` must be able to act as a base (checked by `Config::api_base_url`)
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `notes` and the given segments appended, each segment
    /// percent-encoded on its own
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("notes").extend(segments);
        }
        url
    }

    async fn send(&self, operation: ApiOperation, request: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(operation, e.to_string()))?;

        let status = response.status();
        debug!("{} -> {}", operation, status);

        if !status.is_success() {
            return Err(ApiError::request_failed(
                operation,
                format!("server responded with {}", status),
            ));
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, operation: ApiOperation, request: RequestBuilder) -> ApiResult<T> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::request_failed(operation, format!("invalid response body: {}", e)))
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list_notes(&self, search: Option<&str>) -> ApiResult<Vec<Note>> {
        let mut request = self.client.get(self.endpoint(&[]));
        if let Some(term) = search.filter(|term| !term.is_empty()) {
            request = request.query(&[("search", term)]);
        }
        debug!("Listing notes (search: {:?})", search);
        self.send_json(ApiOperation::ListNotes, request).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        debug!("Creating note '{}'", draft.title);
        let request = self.client.post(self.endpoint(&[])).json(draft);
        self.send_json(ApiOperation::CreateNote, request).await
    }

    async fn get_note(&self, note_id: &str) -> ApiResult<Note> {
        debug!("Fetching note {}", note_id);
        let request = self.client.get(self.endpoint(&[note_id]));
        self.send_json(ApiOperation::GetNote, request).await
    }

    async fn update_note(&self, note_id: &str, draft: &NoteDraft) -> ApiResult<Note> {
        debug!("Updating note {}", note_id);
        let request = self.client.put(self.endpoint(&[note_id])).json(draft);
        self.send_json(ApiOperation::UpdateNote, request).await
    }

    async fn delete_note(&self, note_id: &str) -> ApiResult<DeleteAck> {
        debug!("Deleting note {}", note_id);
        let operation = ApiOperation::DeleteNote;
        let request = self.client.delete(self.endpoint(&[note_id]));
        let body = self
            .send(operation, request)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::request_failed(operation, e.to_string()))?;

        if body.trim().is_empty() {
            return Ok(DeleteAck::default());
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::request_failed(operation, format!("invalid response body: {}", e)))
    }
}
