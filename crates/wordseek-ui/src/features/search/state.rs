//! Search feature state.

/// Lifecycle of the save-search control.
///
/// The control only appears after a suggestion has been chosen, and a save
/// that is already in flight is never clobbered by later UI events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveControl {
    /// No saveable term on screen.
    Hidden,
    /// A chosen term is on screen and can be saved.
    Ready,
    /// A save request is in flight.
    Saving,
    /// The term on screen has been saved.
    Saved,
}

impl SaveControl {
    /// A suggestion was chosen; the term on screen is saveable.
    #[must_use]
    pub const fn on_chosen(self) -> Self {
        match self {
            Self::Saving => Self::Saving,
            _ => Self::Ready,
        }
    }

    /// Begin a save. Only a ready control transitions.
    #[must_use]
    pub const fn begin(self) -> Self {
        match self {
            Self::Ready => Self::Saving,
            other => other,
        }
    }

    /// A save settled. Only an in-flight save transitions; a control the
    /// user already reset stays put.
    #[must_use]
    pub const fn finish(self, succeeded: bool) -> Self {
        match self {
            Self::Saving if succeeded => Self::Saved,
            Self::Saving => Self::Ready,
            other => other,
        }
    }

    /// Whether a save request is currently in flight.
    #[must_use]
    pub const fn is_saving(self) -> bool {
        matches!(self, Self::Saving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_appears_only_after_a_choice() {
        assert_eq!(SaveControl::Hidden.on_chosen(), SaveControl::Ready);
        assert_eq!(SaveControl::Hidden.begin(), SaveControl::Hidden);
    }

    #[test]
    fn save_lifecycle() {
        let control = SaveControl::Ready.begin();
        assert!(control.is_saving());
        assert_eq!(control.finish(true), SaveControl::Saved);
        assert_eq!(SaveControl::Ready.begin().finish(false), SaveControl::Ready);
    }

    #[test]
    fn resetting_during_a_save_discards_its_result() {
        // Typing resets the control to `Hidden`; the in-flight save must
        // then settle without resurrecting it.
        assert_eq!(SaveControl::Hidden.finish(true), SaveControl::Hidden);
        assert_eq!(SaveControl::Hidden.finish(false), SaveControl::Hidden);
    }

    #[test]
    fn in_flight_save_is_not_clobbered_by_a_new_choice() {
        assert_eq!(SaveControl::Saving.on_chosen(), SaveControl::Saving);
    }
}
