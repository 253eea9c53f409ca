//! Domain Score Calculator - reduces raw responses into per-domain scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DomainWeights, MaturityClassifier, MaturityProfile, Response, MAX_SCORE_PER_QUESTION};
use crate::domain::foundation::{round_to, DomainId};

/// Running sum of scores for one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainTally {
    pub total: u32,
    pub count: u32,
}

impl DomainTally {
    /// Mean score; 0 when no question was answered.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        f64::from(self.total) / f64::from(self.count)
    }

    /// Share of the maximum attainable score, 0-100.
    pub fn percentage(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let max = f64::from(self.count) * f64::from(MAX_SCORE_PER_QUESTION);
        f64::from(self.total) / max * 100.0
    }
}

/// Derived score for one domain. Recomputed on every scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub domain: DomainId,
    /// Mean score, rounded to 2 decimals.
    pub average_score: f64,
    pub max_per_question: u8,
    /// Rounded to 1 decimal.
    pub percentage: f64,
    pub maturity: MaturityProfile,
    pub question_count: u32,
}

/// Output of one calculator pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    /// Weighted overall score, rounded to 2 decimals.
    pub overall: f64,
    /// One entry per domain in canonical order.
    pub domains: Vec<DomainScore>,
}

/// Pure reduction of responses to domain and overall scores.
pub struct DomainScoreCalculator<'a> {
    weights: &'a DomainWeights,
    classifier: &'a MaturityClassifier,
}

impl<'a> DomainScoreCalculator<'a> {
    pub fn new(weights: &'a DomainWeights, classifier: &'a MaturityClassifier) -> Self {
        Self { weights, classifier }
    }

    /// Sums scores per domain. Every domain is present, even with no responses.
    ///
    /// Policy indicator answers are skipped.
    pub fn tally<'r>(responses: impl IntoIterator<Item = &'r Response>) -> BTreeMap<DomainId, DomainTally> {
        let mut tallies: BTreeMap<DomainId, DomainTally> =
            DomainId::ALL.iter().map(|d| (*d, DomainTally::default())).collect();

        for response in responses {
            let Some(domain) = response.domain() else {
                continue;
            };
            let tally = tallies.entry(domain).or_default();
            tally.total += u32::from(response.score());
            tally.count += 1;
        }

        tallies
    }

    /// Rounded per-domain averages, as used for team comparisons.
    pub fn domain_averages<'r>(responses: impl IntoIterator<Item = &'r Response>) -> BTreeMap<DomainId, f64> {
        Self::tally(responses)
            .into_iter()
            .map(|(domain, tally)| (domain, round_to(tally.average(), 2)))
            .collect()
    }

    /// Computes every domain score and the weighted overall score.
    ///
    /// The overall score weights the unrounded domain averages and is rounded
    /// once at the end; maturity is classified from the unrounded average.
    pub fn calculate(&self, responses: &[Response]) -> ScoreCard {
        let tallies = Self::tally(responses);
        let mut weighted_sum = 0.0;
        let mut domains = Vec::with_capacity(tallies.len());

        for (domain, tally) in &tallies {
            let average = tally.average();
            weighted_sum += average * self.weights.weight(*domain);

            domains.push(DomainScore {
                domain: *domain,
                average_score: round_to(average, 2),
                max_per_question: MAX_SCORE_PER_QUESTION,
                percentage: round_to(tally.percentage(), 1),
                maturity: self.classifier.classify(average),
                question_count: tally.count,
            });
        }

        ScoreCard {
            overall: round_to(weighted_sum, 2),
            domains,
        }
    }
}
