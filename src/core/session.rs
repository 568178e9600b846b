// src/core/session.rs
use chrono::Utc;

use crate::models::HistoryEntry;

/// Number of past checks shown to the user.
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// State for one interactive run: every check made so far and the
/// currently suggested password. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
    generated_password: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, password: &str, verdict: &str) {
        self.history.push(HistoryEntry {
            password: password.to_string(),
            verdict: verdict.to_string(),
            checked_at: Utc::now(),
        });
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev().take(limit)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn set_generated(&mut self, password: String) {
        self.generated_password = Some(password);
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated_password.as_deref()
    }
}
