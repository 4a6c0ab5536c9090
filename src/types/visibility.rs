//! Show/hide toggles for the password inputs.

/// Visibility of the two password fields.
///
/// Pure view state toggled by the eye icons; it has no bearing on
/// validation or submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub password_visible: bool,
    pub confirm_password_visible: bool,
}

impl VisibilityState {
    /// Both fields hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_password(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_confirm_password(&mut self) {
        self.confirm_password_visible = !self.confirm_password_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let state = VisibilityState::new();
        assert!(!state.password_visible);
        assert!(!state.confirm_password_visible);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = VisibilityState::new();
        state.toggle_password();
        assert!(state.password_visible);
        assert!(!state.confirm_password_visible);

        state.toggle_confirm_password();
        state.toggle_password();
        assert!(!state.password_visible);
        assert!(state.confirm_password_visible);
    }
}
