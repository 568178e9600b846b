use crate::advisor::{AdvisoryClient, AdvisoryError, Result};
use std::sync::Mutex;

/// Scripted advisory client that remembers every password it was asked about.
#[derive(Debug)]
pub struct MockAdvisor {
    reply: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MockAdvisor {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with [`AdvisoryError::EmptyResponse`].
    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl AdvisoryClient for MockAdvisor {
    fn advise(&self, password: &str) -> Result<String> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(password.to_string());
        self.reply.clone().ok_or(AdvisoryError::EmptyResponse)
    }
}
