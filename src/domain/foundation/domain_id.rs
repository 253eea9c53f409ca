//! Assessment domain identifiers.
//!
//! The set of domains is closed: every response, weight and recommendation is
//! keyed by one of these variants, so an unrecognized domain id is rejected at
//! parse time instead of being carried through scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A weighted category of the readiness assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainId {
    Strategy,
    Governance,
    Pedagogy,
    Technology,
    Culture,
    Alignment,
}

impl DomainId {
    /// All domains in canonical iteration order.
    pub const ALL: [DomainId; 6] = [
        DomainId::Strategy,
        DomainId::Governance,
        DomainId::Pedagogy,
        DomainId::Technology,
        DomainId::Culture,
        DomainId::Alignment,
    ];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::Strategy => "strategy",
            DomainId::Governance => "governance",
            DomainId::Pedagogy => "pedagogy",
            DomainId::Technology => "technology",
            DomainId::Culture => "culture",
            DomainId::Alignment => "alignment",
        }
    }

    /// Returns the human-readable domain name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DomainId::Strategy => "Strategy & Leadership",
            DomainId::Governance => "Governance & Policy",
            DomainId::Pedagogy => "Teaching & Learning",
            DomainId::Technology => "Technology & Infrastructure",
            DomainId::Culture => "Culture & Change Readiness",
            DomainId::Alignment => "Mission Alignment",
        }
    }

    /// Default contribution of this domain to the overall score.
    ///
    /// | Domain | Weight |
    /// |--------|--------|
    /// | Strategy | 0.20 |
    /// | Governance | 0.15 |
    /// | Pedagogy | 0.20 |
    /// | Technology | 0.15 |
    /// | Culture | 0.15 |
    /// | Alignment | 0.15 |
    pub fn default_weight(&self) -> f64 {
        match self {
            DomainId::Strategy => 0.20,
            DomainId::Governance => 0.15,
            DomainId::Pedagogy => 0.20,
            DomainId::Technology => 0.15,
            DomainId::Culture => 0.15,
            DomainId::Alignment => 0.15,
        }
    }

    /// Infers the domain from a question id prefix (`governance_3` -> Governance).
    pub fn from_question_prefix(question_id: &str) -> Option<DomainId> {
        question_prefix(question_id)?.parse().ok()
    }
}

fn question_prefix(question_id: &str) -> Option<&str> {
    question_id.rsplit_once('_').map(|(prefix, _)| prefix)
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainId::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("domain", s))
    }
}

/// Policy indicator question groups.
///
/// Indicator answers feed the policy triggers only; they never count toward
/// a domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyArea {
    StudentPolicy,
    EmployeePolicy,
}

impl PolicyArea {
    pub const ALL: [PolicyArea; 2] = [PolicyArea::StudentPolicy, PolicyArea::EmployeePolicy];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyArea::StudentPolicy => "student_policy",
            PolicyArea::EmployeePolicy => "employee_policy",
        }
    }
}

impl fmt::Display for PolicyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyArea::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("policy area", s))
    }
}

/// What a question measures: a scored domain or a policy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionArea {
    Domain(DomainId),
    Policy(PolicyArea),
}

impl QuestionArea {
    /// Infers the area from a question id prefix (`student_policy_3` -> StudentPolicy).
    pub fn from_question_prefix(question_id: &str) -> Option<QuestionArea> {
        question_prefix(question_id)?.parse().ok()
    }

    /// The scored domain, or `None` for policy indicators.
    pub fn domain(&self) -> Option<DomainId> {
        match self {
            QuestionArea::Domain(domain) => Some(*domain),
            QuestionArea::Policy(_) => None,
        }
    }
}

impl From<DomainId> for QuestionArea {
    fn from(domain: DomainId) -> Self {
        QuestionArea::Domain(domain)
    }
}

impl From<PolicyArea> for QuestionArea {
    fn from(area: PolicyArea) -> Self {
        QuestionArea::Policy(area)
    }
}

impl fmt::Display for QuestionArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionArea::Domain(domain) => domain.fmt(f),
            QuestionArea::Policy(area) => area.fmt(f),
        }
    }
}

impl FromStr for QuestionArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(domain) = s.parse::<DomainId>() {
            return Ok(QuestionArea::Domain(domain));
        }
        s.parse::<PolicyArea>()
            .map(QuestionArea::Policy)
            .map_err(|_| ValidationError::unknown_value("domain", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f64 = DomainId::ALL.iter().map(|d| d.default_weight()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn parses_known_domains() {
        for domain in DomainId::ALL {
            assert_eq!(domain.as_str().parse::<DomainId>().unwrap(), domain);
        }
    }

    #[test]
    fn rejects_unknown_domain() {
        let err = "finance".parse::<DomainId>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownValue { .. }));
    }

    #[test]
    fn infers_domain_from_question_prefix() {
        assert_eq!(DomainId::from_question_prefix("governance_3"), Some(DomainId::Governance));
        assert_eq!(DomainId::from_question_prefix("pedagogy_12"), Some(DomainId::Pedagogy));
        assert_eq!(DomainId::from_question_prefix("student_policy_4"), None);
        assert_eq!(DomainId::from_question_prefix("finance_1"), None);
        assert_eq!(DomainId::from_question_prefix("strategy"), None);
    }

    #[test]
    fn policy_indicator_prefixes_are_not_domains() {
        assert_eq!(
            QuestionArea::from_question_prefix("student_policy_4"),
            Some(QuestionArea::Policy(PolicyArea::StudentPolicy))
        );
        assert_eq!(
            QuestionArea::from_question_prefix("employee_policy_8"),
            Some(QuestionArea::Policy(PolicyArea::EmployeePolicy))
        );
        assert_eq!(
            QuestionArea::from_question_prefix("governance_1"),
            Some(QuestionArea::Domain(DomainId::Governance))
        );
        assert_eq!(QuestionArea::Policy(PolicyArea::StudentPolicy).domain(), None);
        assert!("finance".parse::<QuestionArea>().is_err());
    }

    #[test]
    fn question_area_serializes_as_plain_id() {
        let domain = QuestionArea::Domain(DomainId::Culture);
        let policy = QuestionArea::Policy(PolicyArea::EmployeePolicy);
        assert_eq!(serde_json::to_string(&domain).unwrap(), "\"culture\"");
        assert_eq!(serde_json::to_string(&policy).unwrap(), "\"employee_policy\"");
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&DomainId::Technology).unwrap(), "\"technology\"");
        let parsed: DomainId = serde_json::from_str("\"alignment\"").unwrap();
        assert_eq!(parsed, DomainId::Alignment);
        assert!(serde_json::from_str::<DomainId>("\"finance\"").is_err());
    }
}
