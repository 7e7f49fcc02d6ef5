// Alert banner types shared with the webview.
//
// NOTE: TypeScript mirror types are in ui/src/types.ts
// Keep both files in sync when modifying data structures.

use serde::{Deserialize, Serialize};

/// Kind of the currently shown banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
    Error,
    Warning,
}

impl AlertKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    /// CSS class the webview styles the banner with
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
        }
    }

    /// Get all banner kinds
    pub fn all() -> &'static [AlertKind] {
        &[Self::Info, Self::Success, Self::Error, Self::Warning]
    }
}

/// The banner slice. `active` is true exactly when `kind` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AlertState {
    #[serde(rename = "type")]
    pub kind: Option<AlertKind>,
    pub message: Option<String>,
    pub active: bool,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the banner unconditionally, last write wins
    pub fn show(&mut self, kind: AlertKind, message: Option<String>) {
        self.kind = Some(kind);
        self.message = message;
        self.active = true;
    }

    pub fn info(&mut self, message: Option<String>) {
        self.show(AlertKind::Info, message);
    }

    pub fn success(&mut self, message: Option<String>) {
        self.show(AlertKind::Success, message);
    }

    pub fn error(&mut self, message: Option<String>) {
        self.show(AlertKind::Error, message);
    }

    pub fn warning(&mut self, message: Option<String>) {
        self.show(AlertKind::Warning, message);
    }

    /// Reset to the inactive state
    pub fn clear(&mut self) {
        self.kind = None;
        self.message = None;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_names() {
        for kind in AlertKind::all() {
            assert!(!kind.display_name().is_empty());
            assert!(kind.css_class().starts_with("alert-"));
        }
    }

    #[test]
    fn test_every_kind_overwrites_all_fields() {
        for kind in AlertKind::all() {
            let mut state = AlertState::new();
            state.show(*kind, Some("payload".to_string()));
            assert_eq!(state.kind, Some(*kind));
            assert_eq!(state.message.as_deref(), Some("payload"));
            assert!(state.active);
        }
    }

    #[test]
    fn test_show_is_idempotent() {
        let mut once = AlertState::new();
        once.success(Some("saved".to_string()));

        let mut twice = AlertState::new();
        twice.success(Some("saved".to_string()));
        twice.success(Some("saved".to_string()));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = AlertState::new();
        state.info(Some("loading".to_string()));
        state.error(Some("request failed".to_string()));
        assert_eq!(state.kind, Some(AlertKind::Error));
        assert_eq!(state.message.as_deref(), Some("request failed"));
        assert!(state.active);
    }

    #[test]
    fn test_clear_resets_from_any_state() {
        for kind in AlertKind::all() {
            let mut state = AlertState::new();
            state.show(*kind, Some("payload".to_string()));
            state.clear();
            assert_eq!(state, AlertState::default());
        }

        // Clearing the initial state is a no-op
        let mut state = AlertState::new();
        state.clear();
        assert_eq!(state, AlertState::default());
    }

    #[test]
    fn test_active_iff_kind_is_set() {
        let mut state = AlertState::new();
        assert_eq!(state.active, state.kind.is_some());

        state.warning(None);
        assert_eq!(state.active, state.kind.is_some());

        state.clear();
        assert_eq!(state.active, state.kind.is_some());
    }

    #[test]
    fn test_kind_serializes_as_lowercase_type() {
        let mut state = AlertState::new();
        state.warning(Some("low battery".to_string()));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["message"], "low battery");
        assert_eq!(json["active"], true);
    }
}
