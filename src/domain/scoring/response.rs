//! Questionnaire responses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainId, QuestionArea, ValidationError};

/// Highest score a single question can receive.
pub const MAX_SCORE_PER_QUESTION: u8 = 5;

/// Identifier of a questionnaire item, e.g. `governance_3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a question id, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a literal id from a built-in table.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Area implied by the id prefix, if the prefix names one.
    pub fn inferred_area(&self) -> Option<QuestionArea> {
        QuestionArea::from_question_prefix(&self.0)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded answer. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse", rename_all = "camelCase")]
pub struct Response {
    question_id: QuestionId,
    #[serde(rename = "domain")]
    area: QuestionArea,
    score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    free_text: Option<String>,
}

impl Response {
    /// Creates a response for an explicit domain or policy area.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the score exceeds [`MAX_SCORE_PER_QUESTION`]
    /// - `InvalidFormat` if the question id prefix names a different area
    pub fn new(
        question_id: QuestionId,
        area: impl Into<QuestionArea>,
        score: u8,
    ) -> Result<Self, ValidationError> {
        let area = area.into();
        if score > MAX_SCORE_PER_QUESTION {
            return Err(ValidationError::out_of_range(
                "score",
                0,
                i32::from(MAX_SCORE_PER_QUESTION),
                i32::from(score),
            ));
        }
        if let Some(inferred) = question_id.inferred_area() {
            if inferred != area {
                return Err(ValidationError::invalid_format(
                    "domain",
                    format!("question '{}' belongs to '{}', not '{}'", question_id, inferred, area),
                ));
            }
        }
        Ok(Self {
            question_id,
            area,
            score,
            free_text: None,
        })
    }

    /// Creates a response whose area is inferred from the question id prefix.
    pub fn for_question(question_id: &str, score: u8) -> Result<Self, ValidationError> {
        let question_id = QuestionId::new(question_id)?;
        let area = question_id
            .inferred_area()
            .ok_or_else(|| ValidationError::unknown_value("question_id", question_id.as_str()))?;
        Self::new(question_id, area, score)
    }

    /// Attaches an open-ended text answer.
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.free_text = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn area(&self) -> QuestionArea {
        self.area
    }

    /// Scored domain; `None` for policy indicator answers.
    pub fn domain(&self) -> Option<DomainId> {
        self.area.domain()
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn free_text(&self) -> Option<&str> {
        self.free_text.as_deref()
    }
}

/// Wire shape accepted from callers; validated into [`Response`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    question_id: String,
    #[serde(default)]
    domain: Option<String>,
    score: u8,
    #[serde(default)]
    free_text: Option<String>,
}

impl TryFrom<RawResponse> for Response {
    type Error = ValidationError;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        let response = match raw.domain {
            Some(area) => Response::new(
                QuestionId::new(raw.question_id)?,
                area.parse::<QuestionArea>()?,
                raw.score,
            )?,
            None => Response::for_question(&raw.question_id, raw.score)?,
        };
        Ok(match raw.free_text {
            Some(text) => response.with_free_text(text),
            None => response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PolicyArea;

    #[test]
    fn question_id_rejects_blank() {
        assert!(QuestionId::new("  ").is_err());
        assert_eq!(QuestionId::new(" strategy_1 ").unwrap().as_str(), "strategy_1");
    }

    #[test]
    fn response_rejects_score_above_five() {
        let err = Response::for_question("strategy_1", 6).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 6, .. }));
    }

    #[test]
    fn response_infers_domain_from_prefix() {
        let response = Response::for_question("technology_4", 3).unwrap();
        assert_eq!(response.domain(), Some(DomainId::Technology));
        assert_eq!(response.score(), 3);
    }

    #[test]
    fn response_rejects_unknown_prefix_without_domain() {
        let err = Response::for_question("finance_1", 3).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownValue { .. }));
    }

    #[test]
    fn response_rejects_mismatched_domain() {
        let id = QuestionId::new("governance_1").unwrap();
        let err = Response::new(id, DomainId::Culture, 2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn response_accepts_unprefixed_id_with_explicit_domain() {
        let id = QuestionId::new("q17").unwrap();
        let response = Response::new(id, DomainId::Culture, 4).unwrap();
        assert_eq!(response.domain(), Some(DomainId::Culture));
    }

    #[test]
    fn policy_indicator_response_has_no_domain() {
        let response = Response::for_question("student_policy_3", 2).unwrap();
        assert_eq!(response.domain(), None);
        assert_eq!(response.area(), QuestionArea::Policy(PolicyArea::StudentPolicy));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["domain"], "student_policy");
    }

    #[test]
    fn policy_indicator_rejects_domain_override() {
        let id = QuestionId::new("employee_policy_1").unwrap();
        let err = Response::new(id, DomainId::Governance, 2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn blank_free_text_is_dropped() {
        let response = Response::for_question("culture_1", 2).unwrap().with_free_text("   ");
        assert_eq!(response.free_text(), None);
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let json = r#"{"questionId":"pedagogy_2","domain":"pedagogy","score":4,"freeText":"Pilots in biology"}"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.question_id().as_str(), "pedagogy_2");
        assert_eq!(response.domain(), Some(DomainId::Pedagogy));
        assert_eq!(response.free_text(), Some("Pilots in biology"));
    }

    #[test]
    fn deserialization_rejects_unknown_domain() {
        let json = r#"{"questionId":"q1","domain":"finance","score":4}"#;
        assert!(serde_json::from_str::<Response>(json).is_err());
    }

    #[test]
    fn deserialization_rejects_out_of_range_score() {
        let json = r#"{"questionId":"strategy_1","score":9}"#;
        assert!(serde_json::from_str::<Response>(json).is_err());
    }
}
