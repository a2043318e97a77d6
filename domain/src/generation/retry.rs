//! Retry policy value object.
//!
//! Separates "retry to survive a transient fault" from "retry to exercise the
//! caller's failure handling": both are a [`RetryPolicy`], and the difference
//! lies only in the attempt count and the [`Acceptance`] predicate.

use std::time::Duration;

/// Predicate deciding whether a provider reply counts as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Any non-empty text is accepted.
    AnyText,
    /// Non-empty text of at most this many characters.
    MaxChars(usize),
    /// Nothing is ever accepted; the policy can only end in failure.
    Never,
}

impl Acceptance {
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Acceptance::AnyText => !text.trim().is_empty(),
            Acceptance::MaxChars(max) => {
                !text.trim().is_empty() && text.chars().count() <= *max
            }
            Acceptance::Never => false,
        }
    }
}

/// How many times to call the provider, how long to wait in between, and what
/// counts as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never zero.
    pub max_attempts: u32,
    /// Fixed pause between two consecutive attempts.
    pub delay: Duration,
    pub acceptance: Acceptance,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single()
    }
}

impl RetryPolicy {
    /// Exactly one attempt, any text accepted.
    pub fn single() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
            acceptance: Acceptance::AnyText,
        }
    }

    /// Up to `max_attempts` attempts separated by `delay`.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            acceptance: Acceptance::AnyText,
        }
    }

    /// A policy that runs every attempt and can never succeed.
    pub fn simulated_failure(attempts: u32, delay: Duration) -> Self {
        Self::new(attempts, delay).with_acceptance(Acceptance::Never)
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed.
    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Whether this policy can ever report success.
    pub fn can_succeed(&self) -> bool {
        self.acceptance != Acceptance::Never
    }
}
