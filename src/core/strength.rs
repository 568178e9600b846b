// src/core/strength.rs
use crate::models::{Criteria, StrengthLevel, StrengthVerdict};

pub const MIN_LENGTH: usize = 8;
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

const HINT_LENGTH: &str = "Increase length to at least 8 characters.";
const HINT_UPPERCASE: &str = "Add at least one uppercase letter.";
const HINT_LOWERCASE: &str = "Add at least one lowercase letter.";
const HINT_DIGIT: &str = "Include at least one digit (0-9).";
const HINT_SPECIAL: &str = "Use at least one special character (!@#$%^&*).";

/// Run the five strength rules against a password.
pub fn check_criteria(password: &str) -> Criteria {
    Criteria {
        min_length: password.chars().count() >= MIN_LENGTH,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Score a password and classify it. Every rule is worth one point.
pub fn evaluate(password: &str) -> StrengthVerdict {
    let criteria = check_criteria(password);

    let hints: Vec<String> = [
        (criteria.min_length, HINT_LENGTH),
        (criteria.uppercase, HINT_UPPERCASE),
        (criteria.lowercase, HINT_LOWERCASE),
        (criteria.digit, HINT_DIGIT),
        (criteria.special, HINT_SPECIAL),
    ]
    .iter()
    .filter(|(ok, _)| !ok)
    .map(|(_, hint)| hint.to_string())
    .collect();

    let score = criteria.passed();
    let level = match score {
        5 => StrengthLevel::Strong,
        3 | 4 => StrengthLevel::Moderate,
        _ => StrengthLevel::Weak,
    };

    StrengthVerdict {
        score,
        level,
        criteria,
        hints,
    }
}
