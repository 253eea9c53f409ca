//! Recommendation Rule Engine - maps maturity levels to prioritized
//! recommendations.
//!
//! For each domain the engine picks the first stage template whose
//! `max_level` covers the domain's maturity level. The template's base
//! priority is escalated one step for every level the domain sits below the
//! template's `max_level`, so a domain at level 1 under a level-2 template is
//! more urgent than one at level 2.
//!
//! The overall recommendation ("foundation" at level 2 or below, "scaling" at
//! level 3) is placed first; an expert-guidance recommendation is appended
//! while overall maturity is at or below [`EXPERT_GUIDANCE_MAX_LEVEL`]. The
//! final list is stable-sorted by priority, so ties keep domain order.

use serde::{Deserialize, Serialize};

use super::catalog::{self, RecommendationTemplate};
use crate::domain::foundation::{DomainId, Priority};
use crate::domain::scoring::{DomainScore, MaturityProfile};

/// Highest overall level that still receives the expert-guidance recommendation.
pub const EXPERT_GUIDANCE_MAX_LEVEL: u8 = 3;

/// What a recommendation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationScope {
    Domain(DomainId),
    Overall,
    Implementation,
}

/// A prioritized, actionable recommendation. Generated fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub scope: RecommendationScope,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
    pub timeline: String,
    pub resources: Vec<String>,
}

impl Recommendation {
    fn from_template(scope: RecommendationScope, priority: Priority, template: &RecommendationTemplate) -> Self {
        Self {
            scope,
            priority,
            title: template.title.to_string(),
            description: template.description.to_string(),
            actions: template.actions.iter().map(|a| a.to_string()).collect(),
            timeline: template.timeline.to_string(),
            resources: template.resources.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// The domain this recommendation targets, if any.
    pub fn domain(&self) -> Option<DomainId> {
        match self.scope {
            RecommendationScope::Domain(domain) => Some(domain),
            _ => None,
        }
    }
}

/// Stateless rule engine over the built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationRuleEngine;

impl RecommendationRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produces the sorted recommendation list for one scoring pass.
    pub fn generate(&self, overall: &MaturityProfile, domains: &[DomainScore]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if let Some(template) = Self::overall_template(overall.level) {
            recommendations.push(Recommendation::from_template(
                RecommendationScope::Overall,
                Priority::High,
                template,
            ));
        }

        for score in domains {
            if let Some(rec) = Self::domain_recommendation(score.domain, score.maturity.level) {
                recommendations.push(rec);
            }
        }

        if overall.level <= EXPERT_GUIDANCE_MAX_LEVEL {
            recommendations.push(Recommendation::from_template(
                RecommendationScope::Implementation,
                Priority::Medium,
                &catalog::EXPERT_GUIDANCE,
            ));
        }

        recommendations.sort_by_key(|r| r.priority);
        recommendations
    }

    fn overall_template(level: u8) -> Option<&'static RecommendationTemplate> {
        match level {
            0..=2 => Some(&catalog::FOUNDATION),
            3 => Some(&catalog::SCALING),
            _ => None,
        }
    }

    fn domain_recommendation(domain: DomainId, level: u8) -> Option<Recommendation> {
        let stage = catalog::domain_stages(domain)
            .iter()
            .find(|stage| level <= stage.max_level)?;
        let priority = stage.base_priority.escalate_by(stage.max_level - level);
        Some(Recommendation::from_template(
            RecommendationScope::Domain(domain),
            priority,
            stage.template,
        ))
    }
}
