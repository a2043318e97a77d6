//! Built-in prompt texts.

/// System prompt used when the configured prompt file cannot be read.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert on log collection services.";

/// Deterministic canned explanation returned in mock mode.
///
/// The same question always yields the same text, so callers and tests can
/// rely on it without a provider.
pub fn mock_answer(question: &str) -> String {
    format!(
        "[mock] You asked: \"{}\"\n\n\
         Log aggregation collects log records from many services into one place, \
         normalizes their format, and indexes them so they can be searched, \
         correlated with traces, and alerted on. A typical pipeline has agents \
         that ship logs, a collector that buffers and enriches them, and a store \
         that keeps them for querying.",
        question.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_answer_is_deterministic() {
        assert_eq!(mock_answer("What is X?"), mock_answer("What is X?"));
        assert!(mock_answer("  What is X?  ").contains("\"What is X?\""));
    }
}
