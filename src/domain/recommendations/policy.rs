//! Policy Trigger Evaluator - declarative rules deciding which policy
//! documents an institution needs.
//!
//! A rule names a set of indicator questions, a score threshold and an
//! aggregator. `ANY` fires when at least one indicator scores at or below its
//! threshold; `ALL` requires every indicator to. Unanswered indicators count
//! as [`MISSING_RESPONSE_SCORE`], so an absent answer leans towards "needs
//! policy".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::{Priority, ValidationError};
use crate::domain::scoring::{QuestionId, Response, MAX_SCORE_PER_QUESTION};

/// Score assumed for an indicator question with no response.
pub const MISSING_RESPONSE_SCORE: u8 = 1;

/// The kinds of policy document the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Governance,
    Pedagogy,
    StudentPolicy,
    EmployeePolicy,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Governance => "governance",
            PolicyType::Pedagogy => "pedagogy",
            PolicyType::StudentPolicy => "student_policy",
            PolicyType::EmployeePolicy => "employee_policy",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How indicator comparisons combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregator {
    Any,
    All,
}

/// One indicator question, optionally with its own threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub question_id: QuestionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
}

impl Indicator {
    pub fn new(question_id: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            question_id: QuestionId::new(question_id)?,
            threshold: None,
        })
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// A declarative trigger rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRule {
    pub policy_type: PolicyType,
    pub indicators: Vec<Indicator>,
    /// Threshold applied to indicators without their own.
    pub threshold: u8,
    pub aggregator: Aggregator,
    pub priority: Priority,
}

impl PolicyRule {
    fn fires(&self, scores: &HashMap<&QuestionId, u8>) -> bool {
        let mut hits = self.indicators.iter().map(|indicator| {
            let score = scores
                .get(&indicator.question_id)
                .copied()
                .unwrap_or(MISSING_RESPONSE_SCORE);
            score <= indicator.threshold.unwrap_or(self.threshold)
        });

        match self.aggregator {
            Aggregator::Any => hits.any(|hit| hit),
            Aggregator::All => hits.all(|hit| hit),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.indicators.is_empty() {
            return Err(ValidationError::empty_field(format!(
                "{}.indicators",
                self.policy_type
            )));
        }
        let thresholds = std::iter::once(self.threshold).chain(self.indicators.iter().filter_map(|i| i.threshold));
        for threshold in thresholds {
            if threshold > MAX_SCORE_PER_QUESTION {
                return Err(ValidationError::out_of_range(
                    "threshold",
                    0,
                    i32::from(MAX_SCORE_PER_QUESTION),
                    i32::from(threshold),
                ));
            }
        }
        Ok(())
    }
}

/// A fired rule: the policy type and the priority it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTrigger {
    pub policy_type: PolicyType,
    pub priority: Priority,
}

/// Errors raised while loading a rule set.
#[derive(Debug, Error)]
pub enum PolicyRuleError {
    #[error("failed to read policy rules: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse policy rules: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid policy rule: {0}")]
    Invalid(#[from] ValidationError),
}

/// Evaluates a validated rule set against a response list.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyTriggerEvaluator {
    rules: Vec<PolicyRule>,
}

impl PolicyTriggerEvaluator {
    /// Creates an evaluator, rejecting rules with no indicators or with
    /// thresholds above the maximum score.
    pub fn new(rules: Vec<PolicyRule>) -> Result<Self, ValidationError> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// Parses a YAML list of rules.
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyRuleError> {
        let rules: Vec<PolicyRule> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(rules)?)
    }

    /// Reads and parses a YAML rule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyRuleError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Returns a trigger for every rule that fires, in rule order.
    pub fn evaluate(&self, responses: &[Response]) -> Vec<PolicyTrigger> {
        let scores: HashMap<&QuestionId, u8> = responses
            .iter()
            .map(|r| (r.question_id(), r.score()))
            .collect();

        self.rules
            .iter()
            .filter(|rule| rule.fires(&scores))
            .map(|rule| PolicyTrigger {
                policy_type: rule.policy_type,
                priority: rule.priority,
            })
            .collect()
    }
}

impl Default for PolicyTriggerEvaluator {
    /// The built-in rule set.
    ///
    /// | Policy | Indicators (threshold) | Priority |
    /// |--------|------------------------|----------|
    /// | governance | governance_1 (3), governance_3 (2), governance_8 (3) | high |
    /// | pedagogy | pedagogy_2, pedagogy_6, pedagogy_12 (3) | high |
    /// | student_policy | student_policy_1, _3, _4 (3) | high |
    /// | employee_policy | employee_policy_1, _4, _8 (3) | medium |
    fn default() -> Self {
        fn rule(policy_type: PolicyType, indicators: &[(&'static str, Option<u8>)], priority: Priority) -> PolicyRule {
            PolicyRule {
                policy_type,
                indicators: indicators
                    .iter()
                    .map(|(id, threshold)| Indicator {
                        question_id: QuestionId::from_static(*id),
                        threshold: *threshold,
                    })
                    .collect(),
                threshold: 3,
                aggregator: Aggregator::Any,
                priority,
            }
        }

        Self {
            rules: vec![
                rule(
                    PolicyType::Governance,
                    &[("governance_1", None), ("governance_3", Some(2)), ("governance_8", None)],
                    Priority::High,
                ),
                rule(
                    PolicyType::Pedagogy,
                    &[("pedagogy_2", None), ("pedagogy_6", None), ("pedagogy_12", None)],
                    Priority::High,
                ),
                rule(
                    PolicyType::StudentPolicy,
                    &[("student_policy_1", None), ("student_policy_3", None), ("student_policy_4", None)],
                    Priority::High,
                ),
                rule(
                    PolicyType::EmployeePolicy,
                    &[("employee_policy_1", None), ("employee_policy_4", None), ("employee_policy_8", None)],
                    Priority::Medium,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str, score: u8) -> Response {
        Response::for_question(id, score).unwrap()
    }

    fn all_high(ids: &[&str]) -> Vec<Response> {
        ids.iter().map(|id| response(id, 5)).collect()
    }

    fn single_rule(aggregator: Aggregator) -> PolicyTriggerEvaluator {
        PolicyTriggerEvaluator::new(vec![PolicyRule {
            policy_type: PolicyType::Governance,
            indicators: vec![Indicator::new("governance_1").unwrap(), Indicator::new("governance_2").unwrap()],
            threshold: 2,
            aggregator,
            priority: Priority::High,
        }])
        .unwrap()
    }

    const ALL_INDICATORS: &[&str] = &[
        "governance_1",
        "governance_3",
        "governance_8",
        "pedagogy_2",
        "pedagogy_6",
        "pedagogy_12",
        "student_policy_1",
        "student_policy_3",
        "student_policy_4",
        "employee_policy_1",
        "employee_policy_4",
        "employee_policy_8",
    ];

    #[test]
    fn no_responses_fire_every_default_rule() {
        let triggers = PolicyTriggerEvaluator::default().evaluate(&[]);
        let types: Vec<PolicyType> = triggers.iter().map(|t| t.policy_type).collect();
        assert_eq!(
            types,
            vec![
                PolicyType::Governance,
                PolicyType::Pedagogy,
                PolicyType::StudentPolicy,
                PolicyType::EmployeePolicy
            ]
        );
        assert_eq!(triggers[3].priority, Priority::Medium);
    }

    #[test]
    fn strong_answers_fire_nothing() {
        let triggers = PolicyTriggerEvaluator::default().evaluate(&all_high(ALL_INDICATORS));
        assert!(triggers.is_empty());
    }

    #[test]
    fn per_indicator_threshold_applies() {
        let mut responses = all_high(ALL_INDICATORS);
        responses.retain(|r| r.question_id().as_str() != "governance_3");

        // governance_3 uses threshold 2: a 3 does not fire.
        responses.push(response("governance_3", 3));
        assert!(PolicyTriggerEvaluator::default().evaluate(&responses).is_empty());

        responses.pop();
        responses.push(response("governance_3", 2));
        let triggers = PolicyTriggerEvaluator::default().evaluate(&responses);
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].policy_type, PolicyType::Governance);
    }

    #[test]
    fn any_fires_on_a_single_low_indicator() {
        let evaluator = single_rule(Aggregator::Any);
        let responses = vec![response("governance_1", 2), response("governance_2", 5)];
        assert_eq!(evaluator.evaluate(&responses).len(), 1);
    }

    #[test]
    fn all_requires_every_indicator() {
        let evaluator = single_rule(Aggregator::All);
        let mixed = vec![response("governance_1", 2), response("governance_2", 5)];
        assert!(evaluator.evaluate(&mixed).is_empty());

        let low = vec![response("governance_1", 2), response("governance_2", 0)];
        assert_eq!(evaluator.evaluate(&low).len(), 1);
    }

    #[test]
    fn missing_indicator_counts_as_one() {
        let evaluator = single_rule(Aggregator::All);
        // governance_2 missing -> 1, which is <= 2.
        assert_eq!(evaluator.evaluate(&[response("governance_1", 0)]).len(), 1);
    }

    #[test]
    fn rule_without_indicators_is_rejected() {
        let result = PolicyTriggerEvaluator::new(vec![PolicyRule {
            policy_type: PolicyType::Pedagogy,
            indicators: vec![],
            threshold: 3,
            aggregator: Aggregator::Any,
            priority: Priority::Low,
        }]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn threshold_above_max_is_rejected() {
        let result = PolicyTriggerEvaluator::new(vec![PolicyRule {
            policy_type: PolicyType::Pedagogy,
            indicators: vec![Indicator::new("pedagogy_1").unwrap().with_threshold(7)],
            threshold: 3,
            aggregator: Aggregator::Any,
            priority: Priority::Low,
        }]);
        assert!(matches!(result, Err(ValidationError::OutOfRange { actual: 7, .. })));
    }

    #[test]
    fn loads_rules_from_yaml() {
        let yaml = r#"
- policy_type: student_policy
  threshold: 2
  aggregator: ALL
  priority: low
  indicators:
    - question_id: student_policy_1
    - question_id: student_policy_2
      threshold: 4
"#;
        let evaluator = PolicyTriggerEvaluator::from_yaml(yaml).unwrap();
        assert_eq!(evaluator.rules().len(), 1);
        assert_eq!(evaluator.rules()[0].aggregator, Aggregator::All);

        let responses = vec![response("student_policy_1", 2), response("student_policy_2", 4)];
        let triggers = evaluator.evaluate(&responses);
        assert_eq!(
            triggers,
            vec![PolicyTrigger {
                policy_type: PolicyType::StudentPolicy,
                priority: Priority::Low
            }]
        );
    }

    #[test]
    fn yaml_with_invalid_rule_is_rejected() {
        let yaml = r#"
- policy_type: governance
  threshold: 9
  aggregator: ANY
  priority: high
  indicators:
    - question_id: governance_1
"#;
        assert!(matches!(
            PolicyTriggerEvaluator::from_yaml(yaml),
            Err(PolicyRuleError::Invalid(_))
        ));
        assert!(matches!(
            PolicyTriggerEvaluator::from_yaml("not: [a list"),
            Err(PolicyRuleError::Parse(_))
        ));
    }

    #[test]
    fn loads_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"- policy_type: pedagogy\n  threshold: 3\n  aggregator: ANY\n  priority: medium\n  indicators:\n    - question_id: pedagogy_1\n",
        )
        .unwrap();

        let evaluator = PolicyTriggerEvaluator::from_path(file.path()).unwrap();
        assert_eq!(evaluator.rules()[0].policy_type, PolicyType::Pedagogy);
    }
}
