//! Short code generation
//!
//! `generate` draws a fresh random code; `regenerate` is the deterministic
//! collision fallback that appends a fixed suffix to a taken code.

use crate::utils::generate_random_code;

pub trait CodeGenerator: Send + Sync {
    /// Random code of exactly `length` characters.
    fn generate(&self, length: usize) -> String;

    /// Deterministic replacement for a code that is already taken.
    fn regenerate(&self, code: &str) -> String;
}

/// Production generator backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    suffix: String,
}

impl RandomCodeGenerator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new("-new")
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_random_code(length)
    }

    fn regenerate(&self, code: &str) -> String {
        format!("{}{}", code, self.suffix)
    }
}
