//! Team Consensus Analyzer - quantifies agreement between respondents.
//!
//! For each domain the population variance of the members' domain averages
//! is computed; the variances are averaged across domains and converted to a
//! consensus percentage with a calibration factor:
//!
//! ```text
//! consensus  = max(0, 100 - average_variance * calibration)
//! divergence = 100 - consensus
//! ```
//!
//! The default calibration of 20 is carried over from the product as-is and
//! is configurable pending product calibration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DomainScoreCalculator, QuestionId, Response, ScoringError};
use crate::domain::foundation::{round_to, DomainId};

/// Variance-to-percentage factor used when none is configured.
pub const DEFAULT_CONSENSUS_CALIBRATION: f64 = 20.0;

/// Minimum roster size for a team analysis.
pub const MIN_TEAM_SIZE: usize = 2;

/// One respondent in a team assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub department: String,
    #[serde(default)]
    pub responses: BTreeMap<QuestionId, Response>,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            department: department.into(),
            responses: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the member's answer to a question.
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.insert(response.question_id().clone(), response);
        self
    }
}

/// Agreement summary for a team. `consensus_percent + divergence_percent == 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    pub consensus_percent: f64,
    pub divergence_percent: f64,
    pub member_count: usize,
    pub department_breakdown: BTreeMap<String, usize>,
}

/// Computes [`TeamAnalysis`] for rosters of two or more members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamConsensusAnalyzer {
    calibration: f64,
}

impl TeamConsensusAnalyzer {
    pub fn new(calibration: f64) -> Result<Self, ScoringError> {
        if !calibration.is_finite() || calibration <= 0.0 {
            return Err(ScoringError::InvalidCalibration(calibration));
        }
        Ok(Self { calibration })
    }

    pub fn calibration(&self) -> f64 {
        self.calibration
    }

    /// Returns `None` when fewer than [`MIN_TEAM_SIZE`] members are supplied.
    pub fn analyze(&self, members: &[TeamMember]) -> Option<TeamAnalysis> {
        if members.len() < MIN_TEAM_SIZE {
            return None;
        }

        let mut department_breakdown = BTreeMap::new();
        for member in members {
            *department_breakdown.entry(member.department.clone()).or_insert(0) += 1;
        }

        let member_averages: Vec<BTreeMap<DomainId, f64>> = members
            .iter()
            .map(|m| DomainScoreCalculator::domain_averages(m.responses.values()))
            .collect();

        let total_variance: f64 = DomainId::ALL
            .iter()
            .map(|domain| {
                let scores: Vec<f64> = member_averages
                    .iter()
                    .map(|averages| averages.get(domain).copied().unwrap_or(0.0))
                    .collect();
                population_variance(&scores)
            })
            .sum();
        let average_variance = total_variance / DomainId::ALL.len() as f64;

        let consensus = round_to((100.0 - average_variance * self.calibration).clamp(0.0, 100.0), 1);
        let divergence = round_to(100.0 - consensus, 1);

        Some(TeamAnalysis {
            consensus_percent: consensus,
            divergence_percent: divergence,
            member_count: members.len(),
            department_breakdown,
        })
    }
}

impl Default for TeamConsensusAnalyzer {
    fn default() -> Self {
        Self {
            calibration: DEFAULT_CONSENSUS_CALIBRATION,
        }
    }
}

fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
