// src/core/checker.rs
use serde::Serialize;
use thiserror::Error;

use crate::advisor::{describe_failure, AdvisoryClient, AdvisoryError};
use crate::core::session::Session;
use crate::core::strength;
use crate::generators::PasswordGenerator;
use crate::models::StrengthVerdict;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("Please enter a password to check.")]
    EmptyPassword,
}

/// Everything produced by a single check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub verdict: StrengthVerdict,
    /// Replacement password, only offered for weak verdicts.
    pub suggestion: Option<String>,
    /// `None` when no advisory client was configured.
    pub advice: Option<Result<String, AdvisoryError>>,
}

/// Serializable view of a [`CheckOutcome`] for `--json` output.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub score: u8,
    pub level: String,
    pub message: String,
    pub hints: &'a [String],
    pub suggestion: Option<&'a str>,
    pub advice: Option<String>,
    pub advice_error: Option<String>,
}

impl CheckOutcome {
    pub fn report(&self) -> CheckReport<'_> {
        let (advice, advice_error) = match &self.advice {
            Some(Ok(text)) => (Some(text.clone()), None),
            Some(Err(e)) => (None, Some(describe_failure(e))),
            None => (None, None),
        };

        CheckReport {
            score: self.verdict.score,
            level: self.verdict.level.to_string(),
            message: self.verdict.message(),
            hints: &self.verdict.hints,
            suggestion: self.suggestion.as_deref(),
            advice,
            advice_error,
        }
    }
}

/// Evaluate a password, record it, suggest a replacement when weak and ask
/// the advisory service for commentary.
pub fn check_password(
    session: &mut Session,
    password: &str,
    generator: &PasswordGenerator,
    advisor: Option<&dyn AdvisoryClient>,
) -> Result<CheckOutcome, CheckError> {
    if password.is_empty() {
        return Err(CheckError::EmptyPassword);
    }

    let verdict = strength::evaluate(password);
    log::info!("Password scored {}/5 ({})", verdict.score, verdict.level);

    session.record(password, &verdict.message());

    let suggestion = if verdict.is_weak() {
        Some(regenerate(session, generator))
    } else {
        None
    };

    let advice = advisor.map(|client| {
        let result = client.advise(password);
        if let Err(e) = &result {
            log::warn!("Advisory request failed: {}", e);
        }
        result
    });

    Ok(CheckOutcome {
        verdict,
        suggestion,
        advice,
    })
}

/// Replace the suggested password in the session with a fresh one.
pub fn regenerate(session: &mut Session, generator: &PasswordGenerator) -> String {
    let password = generator.generate();
    session.set_generated(password.clone());
    password
}
