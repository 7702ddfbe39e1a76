//! Profile feature state.

use crate::logic;

/// The password-change form as typed, before any validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    /// First password field.
    pub new_password: String,
    /// Confirmation field; must match exactly.
    pub confirm: String,
}

impl PasswordForm {
    /// Validate locally. A violation produces the message to show inline
    /// and means no request is sent.
    ///
    /// # Errors
    /// Returns the user-facing message when the password is too short or
    /// the fields do not match.
    pub fn validate(&self) -> Result<(), String> {
        logic::validate_password(&self.new_password, &self.confirm)
    }

    /// Clear both fields after a successful change.
    pub fn reset(&mut self) {
        self.new_password.clear();
        self.confirm.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(new_password: &str, confirm: &str) -> PasswordForm {
        PasswordForm {
            new_password: new_password.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn short_password_is_rejected_locally() {
        assert_eq!(
            form("ab", "ab").validate(),
            Err("Password must be at least 3 characters long.".to_string())
        );
    }

    #[test]
    fn mismatched_fields_are_rejected_locally() {
        assert_eq!(
            form("abc", "abd").validate(),
            Err("Passwords do not match.".to_string())
        );
    }

    #[test]
    fn valid_form_passes_and_resets_clean() {
        let mut valid = form("abc", "abc");
        assert_eq!(valid.validate(), Ok(()));
        valid.reset();
        assert_eq!(valid, PasswordForm::default());
    }
}
