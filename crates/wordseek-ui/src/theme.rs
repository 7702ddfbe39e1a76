//! Theme preference handling.
//!
//! # Design
//! - The theme is an opaque stylesheet name from the backend; validating it
//!   against an allow-list is the backend's trust boundary, not ours.
//! - Applying a theme means swapping the stylesheet href, which makes
//!   re-application of the same name naturally idempotent.

/// Stylesheet applied for guests and whenever settings cannot be fetched.
pub const DEFAULT_THEME: &str = "light";

/// A named stylesheet choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    name: String,
}

impl ThemePreference {
    /// Preference for the given name, falling back when the name is blank.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Self::fallback();
        }
        Self {
            name: trimmed.to_string(),
        }
    }

    /// The fixed default preference.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
        }
    }

    /// Preference from a fetched settings payload.
    #[must_use]
    pub fn from_settings(theme: Option<String>) -> Self {
        theme.as_deref().map_or_else(Self::fallback, Self::new)
    }

    /// The stylesheet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The href the active stylesheet link should point at.
    #[must_use]
    pub fn stylesheet_href(&self) -> String {
        format!("{}.css", self.name)
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_theme_maps_to_css_href() {
        assert_eq!(ThemePreference::new("dark").stylesheet_href(), "dark.css");
    }

    #[test]
    fn blank_or_missing_theme_falls_back() {
        assert_eq!(ThemePreference::new("  ").name(), DEFAULT_THEME);
        assert_eq!(ThemePreference::from_settings(None).name(), DEFAULT_THEME);
        assert_eq!(
            ThemePreference::from_settings(Some("dark".to_string())).name(),
            "dark"
        );
    }

    #[test]
    fn reapplying_the_same_theme_is_idempotent() {
        let first = ThemePreference::new("dark");
        let second = ThemePreference::new("dark");
        assert_eq!(first.stylesheet_href(), second.stylesheet_href());
    }
}
