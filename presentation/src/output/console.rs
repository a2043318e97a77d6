//! Console output for one-off `ask` runs

use colored::Colorize;
use qna_domain::GenerationMode;

pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a generated answer with a short header.
    pub fn answer(question: &str, mode: GenerationMode, answer: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question.trim()));
        output.push_str(&format!("{} {}\n\n", "Mode:".cyan().bold(), mode));
        output.push_str(answer);
        output.push('\n');
        output
    }

    /// Format a failure line.
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}
