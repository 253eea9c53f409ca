//! Scoring module - pure reduction of responses into scores.
//!
//! Every component here is a deterministic function of its inputs: the same
//! responses and tables always produce bit-identical results.

mod calculator;
mod consensus;
mod errors;
mod maturity;
mod response;
mod scorer;
mod weights;

pub use calculator::{DomainScore, DomainScoreCalculator, DomainTally, ScoreCard};
pub use consensus::{
    TeamAnalysis, TeamConsensusAnalyzer, TeamMember, DEFAULT_CONSENSUS_CALIBRATION, MIN_TEAM_SIZE,
};
pub use errors::ScoringError;
pub use maturity::{MaturityBand, MaturityClassifier, MaturityProfile};
pub use response::{QuestionId, Response, MAX_SCORE_PER_QUESTION};
pub use scorer::{AuxiliaryIndex, ImplementationRiskScorer, ReadinessIndexScorer, Scorer, ScorerInput};
pub use weights::{DomainWeights, WEIGHT_EPSILON};
