#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Wordseek CGI endpoint.
//!
//! The backend speaks a loose contract: list endpoints answer with either a
//! JSON array or a bare `{"error": "..."}` object, and mutations answer with
//! `{"success": true}` or `{"error": "..."}`. These types capture both shapes
//! so the UI never has to branch on raw `serde_json::Value`s.
use serde::{Deserialize, Serialize};

/// One recorded search from the per-user history list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Server-assigned identifier, unique within one fetched list.
    pub id: u64,
    /// The term that was searched.
    pub search_term: String,
    /// Server-formatted timestamp; the client never re-sorts on it.
    pub timestamp: String,
}

/// One saved search from the per-user saved list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedSearch {
    /// Server-assigned identifier, unique within one fetched list.
    pub id: u64,
    /// The term that was saved.
    pub search_term: String,
    /// Server-formatted timestamp of the save.
    pub timestamp: String,
}

/// One uploaded file from the per-user uploads list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadEntry {
    /// Original filename supplied at upload time.
    pub filename: String,
    /// Server-formatted upload timestamp.
    pub upload_time: String,
}

/// Per-user settings returned by `get_settings=1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    /// Name of the stylesheet the user picked, when one is stored.
    #[serde(default)]
    pub theme: Option<String>,
}

/// Profile payload returned by `get_profile=1`.
///
/// The backend echoes the stored password verbatim; that is its contract,
/// not ours to second-guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    /// Account name.
    pub username: String,
    /// Stored password, echoed by the backend.
    pub password: String,
}

/// Acknowledgement body for mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationAck {
    /// Present and `true` when the mutation was applied.
    #[serde(default)]
    pub success: Option<bool>,
    /// Server-supplied error string, shown to the user verbatim.
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationAck {
    /// Collapse the ack into a result, treating a missing `success` flag as
    /// a failure rather than trusting an ambiguous body.
    ///
    /// # Errors
    /// Returns the server error string, or a fixed message when the body
    /// carried neither field.
    pub fn into_result(self) -> Result<(), String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.success == Some(true) {
            return Ok(());
        }
        Err("request was not acknowledged".to_string())
    }
}

/// Error object some endpoints return in place of a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable reason, shown verbatim.
    pub error: String,
}

/// A list endpoint answers with either a JSON array or an error object.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// The expected collection, possibly empty.
    Items(Vec<T>),
    /// A bare `{"error": "..."}` body.
    Failure(ApiFailure),
}

impl<T> ListPayload<T> {
    /// Collapse the payload into a result.
    ///
    /// # Errors
    /// Returns the server error string when the body was an error object.
    pub fn into_result(self) -> Result<Vec<T>, String> {
        match self {
            Self::Items(items) => Ok(items),
            Self::Failure(failure) => Err(failure.error),
        }
    }
}

/// An object endpoint answers with either its payload or an error object.
///
/// Only meaningful for payloads with at least one required field; a payload
/// whose fields are all optional would swallow the error shape.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ObjectPayload<T> {
    /// The expected payload.
    Value(T),
    /// A bare `{"error": "..."}` body.
    Failure(ApiFailure),
}

impl<T> ObjectPayload<T> {
    /// Collapse the payload into a result.
    ///
    /// # Errors
    /// Returns the server error string when the body was an error object.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_list_deserialises() {
        let body = r#"[
            {"id": 1, "search_term": "cat", "timestamp": "2026-08-20 10:00:00"},
            {"id": 2, "search_term": "dog", "timestamp": "2026-08-20 11:00:00"}
        ]"#;
        let payload: ListPayload<HistoryEntry> = serde_json::from_str(body).unwrap();
        let items = payload.into_result().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].search_term, "cat");
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn error_object_beats_list_shape() {
        let body = r#"{"error": "db unavailable"}"#;
        let payload: ListPayload<HistoryEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_result().unwrap_err(), "db unavailable");
    }

    #[test]
    fn empty_list_is_items_not_failure() {
        let payload: ListPayload<UploadEntry> = serde_json::from_str("[]").unwrap();
        assert_eq!(payload.into_result().unwrap().len(), 0);
    }

    #[test]
    fn ack_success() {
        let ack: MutationAck = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.into_result().is_ok());
    }

    #[test]
    fn ack_error_is_verbatim() {
        let ack: MutationAck = serde_json::from_str(r#"{"error": "not yours"}"#).unwrap();
        assert_eq!(ack.into_result().unwrap_err(), "not yours");
    }

    #[test]
    fn ack_without_flag_is_not_success() {
        let ack: MutationAck = serde_json::from_str("{}").unwrap();
        assert!(ack.into_result().is_err());
    }

    #[test]
    fn profile_body_or_error_object() {
        let body = r#"{"username": "alice", "password": "hunter2"}"#;
        let payload: ObjectPayload<ProfileData> = serde_json::from_str(body).unwrap();
        let profile = payload.into_result().unwrap();
        assert_eq!(profile.username, "alice");
        // The page displays this verbatim, so it must round-trip untouched.
        assert_eq!(profile.password, "hunter2");

        let body = r#"{"error": "no such user"}"#;
        let payload: ObjectPayload<ProfileData> = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_result().unwrap_err(), "no such user");
    }

    #[test]
    fn settings_theme_is_optional() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, None);
        let settings: UserSettings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme.as_deref(), Some("dark"));
    }
}
