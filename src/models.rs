// src/models.rs
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::Moderate => write!(f, "Moderate"),
            StrengthLevel::Weak => write!(f, "Weak"),
        }
    }
}

/// Outcome of each individual strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl Criteria {
    pub fn passed(&self) -> u8 {
        [self.min_length, self.uppercase, self.lowercase, self.digit, self.special]
            .iter()
            .filter(|ok| **ok)
            .count() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthVerdict {
    pub score: u8,
    pub level: StrengthLevel,
    pub criteria: Criteria,
    pub hints: Vec<String>,
}

impl StrengthVerdict {
    pub fn is_weak(&self) -> bool {
        self.level == StrengthLevel::Weak
    }

    /// Human-readable verdict, as stored in the history.
    pub fn message(&self) -> String {
        match self.level {
            StrengthLevel::Strong => "Strong Password! ✅".to_string(),
            StrengthLevel::Moderate => {
                format!("Moderate Password. Consider improving: {}", self.hints.join(", "))
            }
            StrengthLevel::Weak => format!("Weak Password! ❌ Improve: {}", self.hints.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub password: String,
    pub verdict: String,
    pub checked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(level: StrengthLevel, hints: &[&str]) -> StrengthVerdict {
        StrengthVerdict {
            score: 0,
            level,
            criteria: Criteria {
                min_length: false,
                uppercase: false,
                lowercase: false,
                digit: false,
                special: false,
            },
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn test_message_strong_has_no_hints() {
        assert_eq!(verdict(StrengthLevel::Strong, &[]).message(), "Strong Password! ✅");
    }

    #[test]
    fn test_message_joins_hints() {
        let v = verdict(StrengthLevel::Weak, &["one", "two"]);
        assert_eq!(v.message(), "Weak Password! ❌ Improve: one, two");

        let v = verdict(StrengthLevel::Moderate, &["only"]);
        assert_eq!(v.message(), "Moderate Password. Consider improving: only");
    }

    #[test]
    fn test_criteria_passed_counts_true_rules() {
        let c = Criteria {
            min_length: true,
            uppercase: false,
            lowercase: true,
            digit: true,
            special: false,
        };
        assert_eq!(c.passed(), 3);
    }
}
