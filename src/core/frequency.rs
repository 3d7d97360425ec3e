// File: src/core/frequency.rs
use crate::core::types::{Frequency, HIGH_FREQUENCY, LOW_FREQUENCY};
use serde::{Deserialize, Serialize};

/// Maps the trust signal of a committed word to the frequency recorded for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyPolicy {
    trusted: Frequency,
    untrusted: Frequency,
}

impl FrequencyPolicy {
    pub fn new(trusted: Frequency, untrusted: Frequency) -> Self {
        Self { trusted, untrusted }
    }

    pub fn frequency_for(&self, trusted: bool) -> Frequency {
        if trusted {
            self.trusted
        } else {
            self.untrusted
        }
    }

    /// Frequency used for associations the model deliberately under-weights,
    /// such as n-grams rooted at the beginning of a sentence.
    pub fn low(&self) -> Frequency {
        self.untrusted
    }
}

impl Default for FrequencyPolicy {
    fn default() -> Self {
        Self::new(HIGH_FREQUENCY, LOW_FREQUENCY)
    }
}
