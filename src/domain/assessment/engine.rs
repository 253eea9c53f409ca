//! Scoring Engine - runs one complete scoring pass.
//!
//! The engine owns validated tables and rule sets but holds no per-run
//! state: `assess` is a pure function of its arguments and the engine can be
//! shared freely between callers.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use super::{MaturityProfileSet, ScoringResult};
use crate::domain::recommendations::{PolicyRecommendation, PolicyTriggerEvaluator, RecommendationRuleEngine};
use crate::domain::scoring::{
    DomainScoreCalculator, DomainWeights, ImplementationRiskScorer, MaturityClassifier, QuestionId,
    ReadinessIndexScorer, Response, Scorer, ScorerInput, ScoringError, TeamConsensusAnalyzer, TeamMember,
};

/// Stateless scoring service with pluggable auxiliary scorers.
#[derive(Clone)]
pub struct ScoringEngine {
    weights: DomainWeights,
    classifier: MaturityClassifier,
    consensus: TeamConsensusAnalyzer,
    policy_evaluator: PolicyTriggerEvaluator,
    rule_engine: RecommendationRuleEngine,
    scorers: Vec<Arc<dyn Scorer>>,
}

impl ScoringEngine {
    /// Creates an engine with default tables and no auxiliary scorers.
    pub fn new() -> Self {
        Self {
            weights: DomainWeights::default(),
            classifier: MaturityClassifier::default(),
            consensus: TeamConsensusAnalyzer::default(),
            policy_evaluator: PolicyTriggerEvaluator::default(),
            rule_engine: RecommendationRuleEngine::new(),
            scorers: Vec::new(),
        }
    }

    /// Creates an engine with default tables and the built-in scorers.
    pub fn with_default_scorers() -> Self {
        Self::new()
            .with_scorer(Arc::new(ReadinessIndexScorer))
            .with_scorer(Arc::new(ImplementationRiskScorer))
    }

    pub fn with_weights(mut self, weights: DomainWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_classifier(mut self, classifier: MaturityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_consensus(mut self, consensus: TeamConsensusAnalyzer) -> Self {
        self.consensus = consensus;
        self
    }

    pub fn with_policy_evaluator(mut self, evaluator: PolicyTriggerEvaluator) -> Self {
        self.policy_evaluator = evaluator;
        self
    }

    /// Registers an auxiliary scorer. A later scorer with the same id
    /// overwrites the earlier one's index.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorers.push(scorer);
        self
    }

    pub fn weights(&self) -> &DomainWeights {
        &self.weights
    }

    /// Scores a response list, with an optional team roster.
    ///
    /// # Errors
    ///
    /// `DuplicateResponse` if a question is answered twice in `responses`.
    pub fn assess(&self, responses: &[Response], team: &[TeamMember]) -> Result<ScoringResult, ScoringError> {
        Self::ensure_unique(responses)?;

        let card = DomainScoreCalculator::new(&self.weights, &self.classifier).calculate(responses);

        let overall_maturity = self.classifier.classify(card.overall);
        let domain_maturity = card
            .domains
            .iter()
            .map(|d| (d.domain, d.maturity.clone()))
            .collect();

        let recommendations = self.rule_engine.generate(&overall_maturity, &card.domains);
        let policy_recommendations = self
            .policy_evaluator
            .evaluate(responses)
            .iter()
            .map(PolicyRecommendation::from_trigger)
            .collect();

        let input = ScorerInput {
            overall_score: card.overall,
            domain_scores: &card.domains,
            responses,
        };
        let auxiliary_indices = self
            .scorers
            .iter()
            .map(|scorer| (scorer.id().to_string(), scorer.score(&input)))
            .collect();

        Ok(ScoringResult {
            overall_score: card.overall,
            maturity_profile: MaturityProfileSet {
                overall: overall_maturity,
                domains: domain_maturity,
            },
            recommendations,
            policy_recommendations,
            team_analysis: self.consensus.analyze(team),
            auxiliary_indices,
            open_ended_responses: Self::collect_free_text(responses, team),
            domain_scores: card.domains,
        })
    }

    fn ensure_unique(responses: &[Response]) -> Result<(), ScoringError> {
        let mut seen = HashSet::with_capacity(responses.len());
        for response in responses {
            if !seen.insert(response.question_id()) {
                return Err(ScoringError::DuplicateResponse(response.question_id().to_string()));
            }
        }
        Ok(())
    }

    /// Groups free-text answers by question: the primary respondent first,
    /// then team members in roster order.
    fn collect_free_text(responses: &[Response], team: &[TeamMember]) -> BTreeMap<QuestionId, Vec<String>> {
        let mut grouped: BTreeMap<QuestionId, Vec<String>> = BTreeMap::new();
        let team_responses = team.iter().flat_map(|member| member.responses.values());

        for response in responses.iter().chain(team_responses) {
            if let Some(text) = response.free_text() {
                grouped
                    .entry(response.question_id().clone())
                    .or_default()
                    .push(text.to_string());
            }
        }
        grouped
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_default_scorers()
    }
}

impl fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scorer_ids: Vec<&str> = self.scorers.iter().map(|s| s.id()).collect();
        f.debug_struct("ScoringEngine")
            .field("weights", &self.weights)
            .field("consensus", &self.consensus)
            .field("scorers", &scorer_ids)
            .finish_non_exhaustive()
    }
}
