//! Analysis Modes
//!
//! The closed set of analysis styles a caller can request. Each mode selects
//! one prompt template and one result title.

use serde::{Deserialize, Serialize};

/// Requested analysis style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    /// Step-by-step explanation of what the code does
    Explain,
    /// Bugs and vulnerabilities, ranked by priority
    FindIssues,
    /// Refactoring proposal
    Refactor,
}

impl AnalysisMode {
    /// All modes, in display order.
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Explain,
        AnalysisMode::FindIssues,
        AnalysisMode::Refactor,
    ];

    /// Canonical identifier of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Explain => "explain",
            AnalysisMode::FindIssues => "find-issues",
            AnalysisMode::Refactor => "refactor",
        }
    }

    /// Title shown above a successful result for this mode.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisMode::Explain => "Technical Breakdown",
            AnalysisMode::FindIssues => "Security Analysis",
            AnalysisMode::Refactor => "Refactoring Plan",
        }
    }

    /// Parse a caller-supplied mode, falling back to `Explain` for anything
    /// unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for AnalysisMode {
    fn default() -> Self {
        Self::Explain
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "explain" => Ok(AnalysisMode::Explain),
            "find-issues" | "find_issues" | "findissues" | "issues" | "bugs" | "security" => {
                Ok(AnalysisMode::FindIssues)
            }
            "refactor" | "refactoring" | "optimize" => Ok(AnalysisMode::Refactor),
            _ => Err(format!("Unknown analysis mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("explain".parse::<AnalysisMode>().unwrap(), AnalysisMode::Explain);
        assert_eq!("find-issues".parse::<AnalysisMode>().unwrap(), AnalysisMode::FindIssues);
        assert_eq!("bugs".parse::<AnalysisMode>().unwrap(), AnalysisMode::FindIssues);
        assert_eq!("Refactor".parse::<AnalysisMode>().unwrap(), AnalysisMode::Refactor);
        assert!("translate".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_unknown_mode_falls_back_to_explain() {
        assert_eq!(AnalysisMode::parse_lenient("translate"), AnalysisMode::Explain);
        assert_eq!(AnalysisMode::parse_lenient(""), AnalysisMode::Explain);
        assert_eq!(AnalysisMode::parse_lenient(" BUGS "), AnalysisMode::FindIssues);
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: Vec<&str> = AnalysisMode::ALL.iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Technical Breakdown", "Security Analysis", "Refactoring Plan"]);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&AnalysisMode::FindIssues).unwrap();
        assert_eq!(json, "\"find-issues\"");

        let parsed: AnalysisMode = serde_json::from_str("\"refactor\"").unwrap();
        assert_eq!(parsed, AnalysisMode::Refactor);
    }
}
