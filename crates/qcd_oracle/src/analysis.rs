//! Circuit analysis replies
//!
//! Gantree: L5_Oracle → Analysis
//!
//! The analysis reply is free text with `Key: value` lines. Missing keys
//! fall back to fixed placeholders; a failed call is represented by
//! [`CircuitAnalysis::unavailable`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single suggestion returned when suggestions cannot be produced
pub const SUGGESTIONS_UNAVAILABLE: &str =
    "Unable to generate suggestions. Please check your OpenAI API key configuration.";

/// Maximum number of suggestions kept from a reply
pub const MAX_SUGGESTIONS: usize = 3;

/// Structured analysis of a circuit
/// Gantree: CircuitAnalysis // 회로 분석
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitAnalysis {
    /// What the circuit does
    pub description: String,
    /// Simple / Medium / Complex
    pub complexity: String,
    /// Application areas
    pub potential_applications: Vec<String>,
    /// Improvement ideas
    pub optimization_suggestions: Vec<String>,
    /// Rough runtime estimate
    pub estimated_execution_time: String,
}

impl CircuitAnalysis {
    /// Placeholder shown when analysis failed
    pub fn unavailable() -> Self {
        Self {
            description: "Unable to analyze circuit at this time. Please check your OpenAI API key configuration.".into(),
            complexity: "Unknown".into(),
            potential_applications: vec!["Analysis unavailable".into()],
            optimization_suggestions: vec!["Check circuit configuration".into()],
            estimated_execution_time: "Unknown".into(),
        }
    }
}

impl fmt::Display for CircuitAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Complexity: {}", self.complexity)?;
        writeln!(f, "Potential Applications: {}", self.potential_applications.join(", "))?;
        writeln!(f, "Optimization Suggestions: {}", self.optimization_suggestions.join(", "))?;
        write!(f, "Estimated Execution Time: {}", self.estimated_execution_time)
    }
}

/// Parse a `Key: value` analysis reply
/// Gantree: parse_analysis(text) -> CircuitAnalysis // 분석 파싱
pub fn parse_analysis(text: &str) -> CircuitAnalysis {
    let field = |key: &str| value_after(text, key);
    let list = |key: &str| {
        field(key).map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
    };

    CircuitAnalysis {
        description: field("Description:").unwrap_or_else(|| "No description available".into()),
        complexity: field("Complexity:").unwrap_or_else(|| "Unknown".into()),
        potential_applications: list("Potential Applications:")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| vec!["Unknown".into()]),
        optimization_suggestions: list("Optimization Suggestions:")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| vec!["No suggestions".into()]),
        estimated_execution_time: field("Estimated Execution Time:")
            .unwrap_or_else(|| "Unknown".into()),
    }
}

/// First non-empty lines of a suggestions reply
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(String::from)
        .collect()
}

/// Text following `key` on the first line that contains it
fn value_after(text: &str, key: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let start = line.find(key)? + key.len();
        let value = line[start..].trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
