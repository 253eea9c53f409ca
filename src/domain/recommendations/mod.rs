//! Recommendations module - rule engines turning scores into advice.
//!
//! - `rules` - domain and overall recommendations from maturity levels
//! - `policy` - declarative policy triggers over indicator questions
//! - `policy_catalog` - policy document outlines for fired triggers

mod catalog;
mod policy;
mod policy_catalog;
mod rules;

pub use policy::{
    Aggregator, Indicator, PolicyRule, PolicyRuleError, PolicyTrigger, PolicyTriggerEvaluator, PolicyType,
    MISSING_RESPONSE_SCORE,
};
pub use policy_catalog::{PolicyRecommendation, PolicySection};
pub use rules::{Recommendation, RecommendationRuleEngine, RecommendationScope, EXPERT_GUIDANCE_MAX_LEVEL};
