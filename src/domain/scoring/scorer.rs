//! Auxiliary scorers.
//!
//! A [`Scorer`] derives a named secondary index from a completed score card.
//! The engine runs every registered scorer after the domain pass and stores
//! each result under the scorer's id.

use serde::{Deserialize, Serialize};

use super::{DomainScore, Response, MAX_SCORE_PER_QUESTION};
use crate::domain::foundation::round_to;

/// Read-only view of a completed scoring pass.
#[derive(Debug, Clone, Copy)]
pub struct ScorerInput<'a> {
    pub overall_score: f64,
    pub domain_scores: &'a [DomainScore],
    pub responses: &'a [Response],
}

/// Result of one auxiliary scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryIndex {
    /// 0-100.
    pub value: f64,
    pub band: String,
    pub summary: String,
}

/// Pluggable secondary scorer.
pub trait Scorer: Send + Sync {
    /// Key under which the index is reported.
    fn id(&self) -> &'static str;

    fn score(&self, input: &ScorerInput<'_>) -> AuxiliaryIndex;
}

/// Overall readiness expressed on a 0-100 scale with a named band.
///
/// | Index | Band |
/// |-------|------|
/// | < 30 | foundational |
/// | 30 - 49.9 | developing |
/// | 50 - 69.9 | intermediate |
/// | 70 - 84.9 | advanced |
/// | >= 85 | leading |
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessIndexScorer;

impl ReadinessIndexScorer {
    pub const ID: &'static str = "readiness_index";

    fn band(value: f64) -> &'static str {
        match value {
            v if v < 30.0 => "foundational",
            v if v < 50.0 => "developing",
            v if v < 70.0 => "intermediate",
            v if v < 85.0 => "advanced",
            _ => "leading",
        }
    }
}

impl Scorer for ReadinessIndexScorer {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn score(&self, input: &ScorerInput<'_>) -> AuxiliaryIndex {
        let value = round_to(input.overall_score / f64::from(MAX_SCORE_PER_QUESTION) * 100.0, 1);
        let band = Self::band(value);
        AuxiliaryIndex {
            value,
            band: band.to_string(),
            summary: format!("Readiness index of {:.1} places the institution in the {} band.", value, band),
        }
    }
}

/// Risk of stalled implementation given the weakest domain and the spread
/// between domains.
///
/// Only domains with at least one answered question are considered:
///
/// ```text
/// risk = (1 - min / 5) * 60 + ((max - min) / 5) * 40
/// ```
///
/// Below 35 is `low`, below 65 `moderate`, otherwise `high`. With no answered
/// domains the risk is reported as 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplementationRiskScorer;

impl ImplementationRiskScorer {
    pub const ID: &'static str = "implementation_risk";

    fn band(value: f64) -> &'static str {
        if value < 35.0 {
            "low"
        } else if value < 65.0 {
            "moderate"
        } else {
            "high"
        }
    }
}

impl Scorer for ImplementationRiskScorer {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn score(&self, input: &ScorerInput<'_>) -> AuxiliaryIndex {
        let answered: Vec<&DomainScore> = input.domain_scores.iter().filter(|d| d.question_count > 0).collect();

        let weakest = answered
            .iter()
            .min_by(|a, b| a.average_score.total_cmp(&b.average_score));
        let strongest = answered
            .iter()
            .max_by(|a, b| a.average_score.total_cmp(&b.average_score));

        let (weakest, strongest) = match (weakest, strongest) {
            (Some(w), Some(s)) => (w, s),
            _ => {
                return AuxiliaryIndex {
                    value: 100.0,
                    band: Self::band(100.0).to_string(),
                    summary: "No answered domains; implementation risk cannot be reduced.".to_string(),
                }
            }
        };

        let max = f64::from(MAX_SCORE_PER_QUESTION);
        let spread = strongest.average_score - weakest.average_score;
        let value = round_to((1.0 - weakest.average_score / max) * 60.0 + (spread / max) * 40.0, 1);
        let band = Self::band(value);

        AuxiliaryIndex {
            value,
            band: band.to_string(),
            summary: format!(
                "{} implementation risk, driven by {} ({:.2}) against {} ({:.2}).",
                capitalize(band),
                weakest.domain.display_name(),
                weakest.average_score,
                strongest.domain.display_name(),
                strongest.average_score
            ),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
