//! Pure request/response helpers shared by the feature pages.
//!
//! # Design
//! - Keep URL construction and payload parsing testable outside wasm.
//! - Every backend call goes through the single CGI endpoint path with the
//!   operation selected by query parameters.

use chrono::NaiveDateTime;

/// The one endpoint path the backend exposes.
pub const ENDPOINT: &str = "/cgi-bin/search.cgi";

/// Prefix that marks a line of the suggestion response as a candidate.
pub const SUGGESTION_PREFIX: &str = " - ";

fn cgi_path(params: &[(&str, &str)]) -> String {
    let mut path = String::from(ENDPOINT);
    for (index, (key, value)) in params.iter().enumerate() {
        path.push(if index == 0 { '?' } else { '&' });
        path.push_str(key);
        path.push('=');
        path.push_str(&urlencoding::encode(value));
    }
    path
}

/// Path for fetching the per-user search history.
#[must_use]
pub fn history_path(user: &str) -> String {
    cgi_path(&[("history", "1"), ("user", user)])
}

/// Path for deleting one history entry.
#[must_use]
pub fn delete_history_path(user: &str, id: u64) -> String {
    cgi_path(&[
        ("delete_history", "1"),
        ("history_id", &id.to_string()),
        ("user", user),
    ])
}

/// Path for fetching the per-user settings.
#[must_use]
pub fn settings_path(user: &str) -> String {
    cgi_path(&[("get_settings", "1"), ("user", user)])
}

/// Path for fetching the per-user saved searches.
#[must_use]
pub fn saved_path(user: &str) -> String {
    cgi_path(&[("get_saved", "1"), ("user", user)])
}

/// Path for deleting one saved search.
#[must_use]
pub fn delete_saved_path(user: &str, id: u64) -> String {
    cgi_path(&[
        ("delete_saved", "1"),
        ("user", user),
        ("saved_id", &id.to_string()),
    ])
}

/// Path for saving the given term as a saved search.
#[must_use]
pub fn save_search_path(user: &str, term: &str) -> String {
    cgi_path(&[("save_search", "1"), ("user", user), ("term", term)])
}

/// Path for fetching the per-user uploads list.
#[must_use]
pub fn uploads_path(user: &str) -> String {
    cgi_path(&[("uploads", "1"), ("user", user)])
}

/// Path for uploading a text file; the body carries the file content.
#[must_use]
pub fn upload_path(user: &str, filename: &str) -> String {
    cgi_path(&[("upload", "1"), ("user", user), ("filename", filename)])
}

/// Path for a suggestion lookup (`logged = false`) or a recorded search
/// (`logged = true`). The flag is what keeps keystrokes out of the history.
#[must_use]
pub fn search_path(query: &str, user: &str, logged: bool) -> String {
    cgi_path(&[
        ("query", query),
        ("user", user),
        ("log", if logged { "1" } else { "0" }),
    ])
}

/// Path for fetching the profile payload.
#[must_use]
pub fn profile_path(user: &str) -> String {
    cgi_path(&[("get_profile", "1"), ("user", user)])
}

/// Path for the password update; the body carries the raw new password.
#[must_use]
pub fn update_password_path(user: &str) -> String {
    cgi_path(&[("update_password", "1"), ("user", user)])
}

/// Parse the newline-delimited suggestion response. Only lines carrying the
/// marker prefix are suggestions; everything else is server chatter.
#[must_use]
pub fn parse_suggestions(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| line.strip_prefix(SUGGESTION_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Validate a password change before any network call.
///
/// # Errors
/// Returns the message to show when the new value is too short or the
/// confirmation does not match.
pub fn validate_password(new: &str, confirm: &str) -> Result<(), String> {
    if new.len() < 3 {
        return Err("Password must be at least 3 characters long.".to_string());
    }
    if new != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

/// Render a server timestamp as a relative label against `now_ms`.
///
/// Unparseable or future timestamps fall back to the raw server string, so
/// a clock skew never hides data.
#[must_use]
pub fn relative_label(timestamp: &str, now_ms: i64) -> String {
    let Some(parsed) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };
    let elapsed = now_ms / 1000 - parsed.and_utc().timestamp();
    if elapsed < 0 {
        return timestamp.to_string();
    }
    if elapsed < 60 {
        return "just now".to_string();
    }
    if elapsed < 3600 {
        return format!("{}m ago", elapsed / 60);
    }
    if elapsed < 86_400 {
        return format!("{}h ago", elapsed / 3600);
    }
    format!("{}d ago", elapsed / 86_400)
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_encoded_parameters() {
        assert_eq!(
            history_path("alice"),
            "/cgi-bin/search.cgi?history=1&user=alice"
        );
        assert_eq!(
            save_search_path("alice", "black cat"),
            "/cgi-bin/search.cgi?save_search=1&user=alice&term=black%20cat"
        );
        assert_eq!(
            delete_history_path("a&b", 7),
            "/cgi-bin/search.cgi?delete_history=1&history_id=7&user=a%26b"
        );
    }

    #[test]
    fn search_path_log_flag() {
        assert!(search_path("cat", "alice", false).ends_with("&log=0"));
        assert!(search_path("cat", "alice", true).ends_with("&log=1"));
    }

    #[test]
    fn suggestions_require_the_marker_prefix() {
        let body = "Results for cat:\n - cat\n - catalog\nno match here\n- catsup";
        assert_eq!(parse_suggestions(body), vec!["cat", "catalog"]);
    }

    #[test]
    fn empty_body_yields_no_suggestions() {
        assert!(parse_suggestions("").is_empty());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("abc", "abc").is_ok());
        assert_eq!(
            validate_password("ab", "ab").unwrap_err(),
            "Password must be at least 3 characters long."
        );
        assert_eq!(
            validate_password("abcd", "abce").unwrap_err(),
            "Passwords do not match."
        );
    }

    #[test]
    fn relative_label_buckets() {
        // 2026-08-20 10:00:00 UTC in milliseconds.
        let base_ms = 1_787_220_000_000;
        let stamp = "2026-08-20 10:00:00";
        assert_eq!(relative_label(stamp, base_ms + 30_000), "just now");
        assert_eq!(relative_label(stamp, base_ms + 5 * 60_000), "5m ago");
        assert_eq!(relative_label(stamp, base_ms + 3 * 3_600_000), "3h ago");
        assert_eq!(relative_label(stamp, base_ms + 48 * 3_600_000), "2d ago");
    }

    #[test]
    fn relative_label_falls_back_to_raw() {
        assert_eq!(relative_label("yesterday-ish", 0), "yesterday-ish");
        // Future timestamps stay verbatim rather than going negative.
        assert_eq!(
            relative_label("2026-08-20 10:00:00", 0),
            "2026-08-20 10:00:00"
        );
    }
}
