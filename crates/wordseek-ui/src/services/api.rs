//! HTTP client for the CGI endpoint.

use gloo_net::http::{Request, Response};
use thiserror::Error;
use wordseek_api_models::{
    HistoryEntry, ListPayload, MutationAck, ObjectPayload, ProfileData, SavedSearch, UploadEntry,
    UserSettings,
};

use crate::logic;

/// Why a backend call failed, split by where the failure surfaced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum ApiError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The endpoint answered 200 with an error payload; shown verbatim.
    #[error("{0}")]
    Server(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client against the given origin; an empty base means same-origin.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let resp = Request::get(&self.url(path)).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }

    async fn get_list<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let payload: ListPayload<T> = self.get(path).await?.json().await?;
        payload.into_result().map_err(ApiError::Server)
    }

    async fn post_ack(&self, path: &str) -> Result<(), ApiError> {
        let resp = Request::post(&self.url(path)).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let ack: MutationAck = resp.json().await?;
        ack.into_result().map_err(ApiError::Server)
    }

    pub(crate) async fn fetch_history(&self, user: &str) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_list(&logic::history_path(user)).await
    }

    pub(crate) async fn delete_history(&self, user: &str, id: u64) -> Result<(), ApiError> {
        self.post_ack(&logic::delete_history_path(user, id)).await
    }

    pub(crate) async fn fetch_settings(&self, user: &str) -> Result<UserSettings, ApiError> {
        Ok(self.get(&logic::settings_path(user)).await?.json().await?)
    }

    pub(crate) async fn fetch_saved(&self, user: &str) -> Result<Vec<SavedSearch>, ApiError> {
        self.get_list(&logic::saved_path(user)).await
    }

    pub(crate) async fn delete_saved(&self, user: &str, id: u64) -> Result<(), ApiError> {
        self.post_ack(&logic::delete_saved_path(user, id)).await
    }

    pub(crate) async fn save_search(&self, user: &str, term: &str) -> Result<(), ApiError> {
        self.post_ack(&logic::save_search_path(user, term)).await
    }

    pub(crate) async fn fetch_uploads(&self, user: &str) -> Result<Vec<UploadEntry>, ApiError> {
        self.get_list(&logic::uploads_path(user)).await
    }

    /// Upload a word file's text content. Returns the server's textual ack.
    pub(crate) async fn upload_text(
        &self,
        user: &str,
        filename: &str,
        content: &str,
    ) -> Result<String, ApiError> {
        let resp = Request::post(&self.url(&logic::upload_path(user, filename)))
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(content)
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.text().await?)
    }

    /// Suggestion lookup for a query prefix. Never recorded in history.
    pub(crate) async fn suggest(&self, query: &str, user: &str) -> Result<Vec<String>, ApiError> {
        let body = self
            .get(&logic::search_path(query, user, false))
            .await?
            .text()
            .await?;
        Ok(logic::parse_suggestions(&body))
    }

    /// Record a deliberate search in the per-user history. The response body
    /// is irrelevant; only the log side effect matters.
    pub(crate) async fn log_search(&self, query: &str, user: &str) -> Result<(), ApiError> {
        self.get(&logic::search_path(query, user, true)).await?;
        Ok(())
    }

    pub(crate) async fn fetch_profile(&self, user: &str) -> Result<ProfileData, ApiError> {
        let payload: ObjectPayload<ProfileData> =
            self.get(&logic::profile_path(user)).await?.json().await?;
        payload.into_result().map_err(ApiError::Server)
    }

    /// Change the password. Returns the server's textual ack for display.
    pub(crate) async fn update_password(
        &self,
        user: &str,
        new_password: &str,
    ) -> Result<String, ApiError> {
        let resp = Request::post(&self.url(&logic::update_password_path(user)))
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(new_password)
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.text().await?)
    }
}
