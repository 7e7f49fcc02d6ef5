// Alert store - applies banner mutations and keeps a bounded history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{AlertKind, AlertState};

/// Number of raised alerts kept for the notifications panel
const HISTORY_CAP: usize = 50;

/// One raised alert, as listed in the notifications panel
#[derive(Debug, Clone, Serialize)]
pub struct AlertRecord {
    pub kind: AlertKind,
    pub message: Option<String>,
    pub raised_at: DateTime<Utc>,
}

/// Wraps the banner slice so every mutation also lands in the history.
#[derive(Debug, Default)]
pub struct AlertStore {
    state: AlertState,
    history: Vec<AlertRecord>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a banner of the given kind, overwriting whatever is showing.
    /// Returns the snapshot to publish to the webview.
    pub fn raise(&mut self, kind: AlertKind, message: Option<String>) -> AlertState {
        self.state.show(kind, message.clone());
        self.history.push(AlertRecord {
            kind,
            message,
            raised_at: Utc::now(),
        });
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
        self.state.clone()
    }

    /// Dismiss the banner. History is left alone.
    pub fn clear(&mut self) -> AlertState {
        self.state.clear();
        self.state.clone()
    }

    pub fn current(&self) -> &AlertState {
        &self.state
    }

    /// Raised alerts, oldest first
    pub fn history(&self) -> &[AlertRecord] {
        &self.history
    }
}
