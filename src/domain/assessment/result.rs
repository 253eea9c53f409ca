//! Assembled scoring output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::DomainId;
use crate::domain::recommendations::{PolicyRecommendation, Recommendation};
use crate::domain::scoring::{
    AuxiliaryIndex, DomainScore, MaturityProfile, QuestionId, TeamAnalysis, MAX_SCORE_PER_QUESTION,
};

/// Maturity for the institution and for each domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityProfileSet {
    pub overall: MaturityProfile,
    pub domains: BTreeMap<DomainId, MaturityProfile>,
}

/// Everything one scoring pass produces. Plain data, handed to the report
/// planner and to whatever renders or stores the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub overall_score: f64,
    pub domain_scores: Vec<DomainScore>,
    pub maturity_profile: MaturityProfileSet,
    pub recommendations: Vec<Recommendation>,
    pub policy_recommendations: Vec<PolicyRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_analysis: Option<TeamAnalysis>,
    #[serde(default)]
    pub auxiliary_indices: BTreeMap<String, AuxiliaryIndex>,
    #[serde(default)]
    pub open_ended_responses: BTreeMap<QuestionId, Vec<String>>,
}

impl ScoringResult {
    /// Overall score as a percentage of the maximum.
    pub fn overall_percentage(&self) -> f64 {
        self.overall_score / f64::from(MAX_SCORE_PER_QUESTION) * 100.0
    }

    pub fn domain_score(&self, domain: DomainId) -> Option<&DomainScore> {
        self.domain_scores.iter().find(|d| d.domain == domain)
    }

    /// Highest-scoring answered domain; the earliest wins ties.
    pub fn strongest_domain(&self) -> Option<&DomainScore> {
        self.answered_domains()
            .fold(None, |best: Option<&DomainScore>, d| match best {
                Some(b) if b.average_score >= d.average_score => Some(b),
                _ => Some(d),
            })
    }

    /// Lowest-scoring answered domain; the earliest wins ties.
    pub fn weakest_domain(&self) -> Option<&DomainScore> {
        self.answered_domains()
            .fold(None, |worst: Option<&DomainScore>, d| match worst {
                Some(w) if w.average_score <= d.average_score => Some(w),
                _ => Some(d),
            })
    }

    fn answered_domains(&self) -> impl Iterator<Item = &DomainScore> {
        self.domain_scores.iter().filter(|d| d.question_count > 0)
    }
}
