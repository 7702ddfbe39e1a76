//! Session context shared by every feature page.
//!
//! # Design
//! - Identity and theme are resolved exactly once per app boot; pages read
//!   the outcome from context instead of re-deriving it.
//! - Exactly one API client per boot, shared by reference.

use std::rc::Rc;

use crate::identity::GUEST;
use crate::services::api::ApiClient;
use crate::services::log_queue::LogQueue;
use crate::theme::ThemePreference;

/// Everything a page needs to talk to the backend as the current user.
#[derive(Clone)]
pub(crate) struct SessionCtx {
    /// Resolved username carried on every per-user call.
    pub user: Rc<String>,
    /// Theme settled during bootstrap.
    pub theme: ThemePreference,
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
    /// Best-effort history logging.
    pub logs: LogQueue,
}

impl SessionCtx {
    pub(crate) fn new(user: String, theme: ThemePreference, client: Rc<ApiClient>) -> Self {
        let logs = LogQueue::new(client.clone());
        Self {
            user: Rc::new(user),
            theme,
            client,
            logs,
        }
    }

    /// Whether the session is the anonymous fallback.
    pub(crate) fn is_guest(&self) -> bool {
        self.user.as_str() == GUEST
    }
}

impl PartialEq for SessionCtx {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user && Rc::ptr_eq(&self.client, &other.client)
    }
}
