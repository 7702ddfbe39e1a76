//! Identity resolution for page bootstrap.
//!
//! # Design
//! - Precedence is fixed: URL parameter, then stored session value, then guest.
//! - Resolution is pure; persisting the result and rewriting the URL are
//!   side effects owned by the app shell.

/// Fallback identity used when nothing was provided or stored.
pub const GUEST: &str = "guest";

/// Outcome of resolving the current identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// The username every per-user backend call will carry.
    pub name: String,
    /// Whether the name came from the URL and must be persisted + stripped.
    pub from_url: bool,
}

impl ResolvedIdentity {
    /// Whether this identity is the anonymous fallback.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.name == GUEST
    }
}

/// Resolve the identity from the URL parameter and the stored session value.
///
/// A URL-provided name always wins; a stored name is honoured unless it is
/// blank or the guest sentinel; otherwise the guest fallback applies.
#[must_use]
pub fn resolve(url_user: Option<&str>, stored: Option<&str>) -> ResolvedIdentity {
    if let Some(name) = url_user.map(str::trim).filter(|name| !name.is_empty()) {
        return ResolvedIdentity {
            name: name.to_string(),
            from_url: true,
        };
    }
    if let Some(name) = stored
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != GUEST)
    {
        return ResolvedIdentity {
            name: name.to_string(),
            from_url: false,
        };
    }
    ResolvedIdentity {
        name: GUEST.to_string(),
        from_url: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_user_beats_stored_user() {
        let identity = resolve(Some("alice"), Some("bob"));
        assert_eq!(identity.name, "alice");
        assert!(identity.from_url);
    }

    #[test]
    fn stored_user_beats_guest() {
        let identity = resolve(None, Some("bob"));
        assert_eq!(identity.name, "bob");
        assert!(!identity.from_url);
    }

    #[test]
    fn stored_guest_sentinel_is_ignored() {
        let identity = resolve(None, Some(GUEST));
        assert!(identity.is_guest());
    }

    #[test]
    fn blank_values_fall_through() {
        let identity = resolve(Some("   "), Some(""));
        assert!(identity.is_guest());
        assert!(!identity.from_url);
    }

    #[test]
    fn url_whitespace_is_trimmed() {
        let identity = resolve(Some(" alice "), None);
        assert_eq!(identity.name, "alice");
    }
}
