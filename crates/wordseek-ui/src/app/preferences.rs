//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::identity::{self, ResolvedIdentity};
use crate::theme::ThemePreference;

pub(crate) const USER_KEY: &str = "wordseek.user";
pub(crate) const THEME_KEY: &str = "wordseek.theme";

/// Resolve the current identity from the URL and session storage. A name
/// carried in the URL is persisted for the tab and stripped from the
/// visible address.
pub(crate) fn resolve_identity() -> ResolvedIdentity {
    let url_user = url_user();
    let stored = SessionStorage::get::<String>(USER_KEY).ok();
    let resolved = identity::resolve(url_user.as_deref(), stored.as_deref());
    if resolved.from_url {
        set_session_storage(USER_KEY, &resolved.name);
        strip_user_param();
    }
    resolved
}

/// Remember the theme that settled during bootstrap so the next boot can
/// apply it before the settings fetch answers.
pub(crate) fn persist_theme(theme: &ThemePreference) {
    set_storage(THEME_KEY, theme.name());
}

/// Theme remembered from an earlier boot, if any.
pub(crate) fn load_cached_theme() -> Option<ThemePreference> {
    LocalStorage::get::<String>(THEME_KEY)
        .ok()
        .map(|name| ThemePreference::new(&name))
}

fn url_user() -> Option<String> {
    let search = window().location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("user")
}

/// Rewrite the visible URL without the `user` parameter, keeping every
/// other parameter intact.
fn strip_user_param() {
    let location = window().location();
    let (Ok(path), Ok(search)) = (location.pathname(), location.search()) else {
        return;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return;
    };
    params.delete("user");
    let rest: String = params.to_string().into();
    let url = if rest.is_empty() {
        path
    } else {
        format!("{path}?{rest}")
    };
    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn set_session_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = SessionStorage::set(key, value) {
        log_storage_error("session set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
