//! HTTP client for the export service's list endpoints.

use crate::config::TuiConfig;
use crate::nav::Tab;
use std::time::Duration;
use takeout_api::{ApiErrorBody, CommentEntry, NoteEntry, Page, PageBody, PageQuery, VideoEntry};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Service error: {0}")]
    Service(#[from] ApiErrorBody),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn watch_history(
        &self,
        query: &PageQuery,
    ) -> Result<Page<VideoEntry>, ApiClientError> {
        self.list(Tab::WatchHistory.endpoint(), query).await
    }

    pub async fn search_history(
        &self,
        query: &PageQuery,
    ) -> Result<Page<VideoEntry>, ApiClientError> {
        self.list(Tab::SearchHistory.endpoint(), query).await
    }

    pub async fn comments(&self, query: &PageQuery) -> Result<Page<CommentEntry>, ApiClientError> {
        self.list(Tab::Comments.endpoint(), query).await
    }

    pub async fn keep_notes(&self, query: &PageQuery) -> Result<Page<NoteEntry>, ApiClientError> {
        self.list(Tab::Notes.endpoint(), query).await
    }

    /// Fetch one page from a list endpoint. Bulk deployments ignore the query
    /// parameters and answer with a bare array of everything, which
    /// normalizes to a single page holding the whole collection.
    async fn list<T>(&self, path: &str, query: &PageQuery) -> Result<Page<T>, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body: PageBody<T> = self.get_json(path, query).await?;
        Ok(body.into_page())
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(url).query(query).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                return Err(ApiClientError::Service(body));
            }
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )))
        }
    }
}
