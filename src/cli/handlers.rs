// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::advisor::{describe_failure, AdvisoryClient};
use crate::core::checker::{self, CheckOutcome};
use crate::core::session::{Session, HISTORY_DISPLAY_LIMIT};
use crate::core::strength;
use crate::generators::PasswordGenerator;
use crate::models::StrengthLevel;
use crate::utils::format_time_ago;

/// Styled verdict line, colored by tier.
pub fn render_verdict(outcome: &CheckOutcome) -> String {
    let message = outcome.verdict.message();
    match outcome.verdict.level {
        StrengthLevel::Strong => style(message).green().bold().to_string(),
        StrengthLevel::Moderate => style(message).yellow().to_string(),
        StrengthLevel::Weak => style(message).red().bold().to_string(),
    }
}

/// Advice text, or the failure notice that replaces it.
pub fn render_advice(outcome: &CheckOutcome) -> Option<String> {
    match &outcome.advice {
        Some(Ok(text)) => Some(text.clone()),
        Some(Err(e)) => Some(describe_failure(e)),
        None => None,
    }
}

/// History lines, newest first, or a placeholder when nothing was checked yet.
pub fn render_history(session: &Session) -> Vec<String> {
    let lines: Vec<String> = session
        .recent(HISTORY_DISPLAY_LIMIT)
        .map(|entry| {
            format!(
                "🔑 {} → {} ({})",
                entry.password,
                entry.verdict,
                format_time_ago(entry.checked_at)
            )
        })
        .collect();

    if lines.is_empty() {
        vec!["No password history yet.".to_string()]
    } else {
        lines
    }
}

pub fn print_outcome(outcome: &CheckOutcome) {
    println!("\n{}", render_verdict(outcome));

    if let Some(suggestion) = &outcome.suggestion {
        println!("\n### Suggested Strong Password 🔒");
        println!("{}", style(suggestion).cyan().bold());
    }

    if let Some(advice) = render_advice(outcome) {
        println!("\n### AI Security Recommendations 🧠");
        match &outcome.advice {
            Some(Err(_)) => println!("{}", style(advice).red()),
            _ => println!("{}", advice),
        }
    }
}

pub fn print_history(session: &Session) {
    println!("\n### 🔄 Previous Password Checks");
    for line in render_history(session) {
        println!("{}", line);
    }
}

// One-shot `check` command
pub fn handle_check(
    password: &str,
    json: bool,
    generator: &PasswordGenerator,
    advisor: Option<&dyn AdvisoryClient>,
) -> Result<()> {
    let mut session = Session::new();
    let outcome = checker::check_password(&mut session, password, generator, advisor)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report())?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

// One-shot `generate` command
pub fn handle_generate(count: usize, generator: &PasswordGenerator) -> Result<()> {
    for _ in 0..count {
        let password = generator.generate();
        let verdict = strength::evaluate(&password);
        println!("{}  ({}/5 {})", password, verdict.score, verdict.level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::AdvisoryError;
    use crate::test_utils::MockAdvisor;

    #[test]
    fn test_render_history_empty() {
        assert_eq!(render_history(&Session::new()), vec!["No password history yet."]);
    }

    #[test]
    fn test_render_history_newest_first() {
        let mut session = Session::new();
        for i in 0..7 {
            session.record(&format!("pw{i}"), "Weak");
        }
        let lines = render_history(&session);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("🔑 pw6 → Weak"));
        assert!(lines[4].starts_with("🔑 pw2 → Weak"));
    }

    #[test]
    fn test_render_advice_variants() {
        let mut session = Session::new();
        let generator = PasswordGenerator::default();

        let ok = checker::check_password(
            &mut session,
            "Aa1!aaaa",
            &generator,
            Some(&MockAdvisor::replying("fine")),
        )
        .unwrap();
        assert_eq!(render_advice(&ok).as_deref(), Some("fine"));

        let failed = CheckOutcome {
            advice: Some(Err(AdvisoryError::MissingApiKey)),
            ..ok
        };
        assert_eq!(
            render_advice(&failed).as_deref(),
            Some("Error generating feedback: Missing API key (set GEMINI_API_KEY)")
        );

        let skipped = CheckOutcome { advice: None, ..failed };
        assert_eq!(render_advice(&skipped), None);
    }

    #[test]
    fn test_render_verdict_contains_message() {
        let mut session = Session::new();
        let outcome =
            checker::check_password(&mut session, "abc", &PasswordGenerator::default(), None).unwrap();
        assert!(render_verdict(&outcome).contains("Weak Password!"));
    }

    #[test]
    fn test_handle_check_rejects_empty() {
        let err = handle_check("", false, &PasswordGenerator::default(), None).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a password to check.");
    }
}
