//! Line-scanning heuristics over gateway prose.
//!
//! Deliberately not a grammar: each category is an independent substring or
//! pattern test per line, first-match order, capped at five entries. A line
//! can land in more than one category.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::RiskLevel;

const MAX_ENTRIES_PER_CATEGORY: usize = 5;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered-line pattern"));

static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•]").expect("bullet-line pattern"));

/// Structured hints recovered from free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHints {
    pub conditions: Vec<String>,
    pub tests: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scan prose for condition, test, and recommendation lines.
pub fn parse_structured_hints(text: &str) -> ParsedHints {
    let mut hints = ParsedHints::default();

    for line in text.lines() {
        let lower = line.to_lowercase();

        if hints.conditions.len() < MAX_ENTRIES_PER_CATEGORY
            && (lower.contains("condition") || NUMBERED_LINE.is_match(line))
        {
            hints.conditions.push(line.trim().to_string());
        }
        if hints.tests.len() < MAX_ENTRIES_PER_CATEGORY
            && (lower.contains("test") || lower.contains("lab"))
        {
            hints.tests.push(line.trim().to_string());
        }
        if hints.recommendations.len() < MAX_ENTRIES_PER_CATEGORY
            && (lower.contains("recommend") || BULLET_LINE.is_match(line))
        {
            hints.recommendations.push(line.trim().to_string());
        }
    }

    hints
}

/// Derive a risk level by scanning the whole text for marker substrings,
/// strongest first. Unmarked text defaults to Medium.
pub fn parse_risk_level(text: &str) -> RiskLevel {
    let lower = text.to_lowercase();
    if lower.contains("critical") || lower.contains("emergency") {
        RiskLevel::Critical
    } else if lower.contains("high risk") || lower.contains("severe") {
        RiskLevel::High
    } else if lower.contains("medium") || lower.contains("moderate") {
        RiskLevel::Medium
    } else if lower.contains("low") {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}
