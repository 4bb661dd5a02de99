//! Pattern constraints for parameter values.
//!
//! # Design Decisions
//! - Contains-match is the default: a value passes if any substring matches
//! - Full-match is opt-in and compiled as a separate anchored pattern
//! - Patterns are compiled once, at registry construction

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a constraint pattern is applied to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The value must contain at least one match of the pattern.
    #[default]
    Contains,
    /// The whole value must match the pattern.
    Full,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Contains => write!(f, "contains"),
            MatchMode::Full => write!(f, "full"),
        }
    }
}

/// A compiled pattern constraint.
#[derive(Debug, Clone)]
pub struct Constraint {
    pattern: String,
    contains: Regex,
    full: Regex,
}

impl Constraint {
    /// Compile a constraint from a pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let contains = Regex::new(pattern)?;
        let full = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            contains,
            full,
        })
    }

    /// The pattern as declared.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if `value` satisfies the constraint under `mode`.
    pub fn is_satisfied_by(&self, value: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Contains => self.contains.is_match(value),
            MatchMode::Full => self.full.is_match(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_accepts_partial_match() {
        let c = Constraint::new("[a-z]+").unwrap();
        assert!(c.is_satisfied_by("rs0", MatchMode::Contains));
        assert!(c.is_satisfied_by("RS0x", MatchMode::Contains));
        assert!(!c.is_satisfied_by("123", MatchMode::Contains));
        assert!(!c.is_satisfied_by("", MatchMode::Contains));
    }

    #[test]
    fn test_full_rejects_partial_match() {
        let c = Constraint::new("[a-z]+").unwrap();
        assert!(c.is_satisfied_by("rs", MatchMode::Full));
        assert!(!c.is_satisfied_by("rs0", MatchMode::Full));
        assert!(!c.is_satisfied_by("", MatchMode::Full));
    }

    #[test]
    fn test_full_anchors_alternation() {
        // Without the group, `^a|b$` would accept "ax".
        let c = Constraint::new("a|b").unwrap();
        assert!(c.is_satisfied_by("a", MatchMode::Full));
        assert!(!c.is_satisfied_by("ax", MatchMode::Full));
    }

    #[test]
    fn test_port_pattern() {
        let c = Constraint::new("[0-9]{4,5}").unwrap();
        assert!(c.is_satisfied_by("27017", MatchMode::Contains));
        assert!(c.is_satisfied_by("270170", MatchMode::Contains));
        assert!(!c.is_satisfied_by("270170", MatchMode::Full));
        assert!(!c.is_satisfied_by("80", MatchMode::Contains));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Constraint::new("[a-z").is_err());
    }
}
