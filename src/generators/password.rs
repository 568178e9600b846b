// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;

pub const PASSWORD_LENGTH: usize = 12;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*";

/// How characters are drawn for a suggested password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Every position drawn independently from the full alphabet.
    Uniform,
    /// One character from each class, the rest from the full alphabet, then shuffled.
    #[default]
    PerClass,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Strategy::Uniform),
            "per-class" | "per_class" | "perclass" => Ok(Strategy::PerClass),
            other => Err(format!("unknown generator strategy '{}'", other)),
        }
    }
}

/// The 70-symbol alphabet suggested passwords are drawn from.
pub fn alphabet() -> Vec<u8> {
    let mut chars = Vec::with_capacity(70);
    chars.extend(UPPERCASE);
    chars.extend(LOWERCASE);
    chars.extend(DIGITS);
    chars.extend(SYMBOLS);
    chars
}

pub struct PasswordGenerator {
    strategy: Strategy,
    alphabet: Vec<u8>,
}

impl PasswordGenerator {
    pub fn new(strategy: Strategy) -> Self {
        PasswordGenerator {
            strategy,
            alphabet: alphabet(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LENGTH);

        if self.strategy == Strategy::PerClass {
            for class in [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS] {
                // Classes are non-empty constants
                if let Some(c) = class.choose(rng) {
                    chars.push(*c);
                }
            }
        }

        while chars.len() < PASSWORD_LENGTH {
            if let Some(c) = self.alphabet.choose(rng) {
                chars.push(*c);
            }
        }

        if self.strategy == Strategy::PerClass {
            chars.shuffle(rng);
        }

        chars.into_iter().map(char::from).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
