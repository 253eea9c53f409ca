//! Priority levels shared by recommendations and policy triggers.

use serde::{Deserialize, Serialize};

/// Priority of a recommendation.
///
/// Variant order is significance order: sorting ascending puts `High` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Raises the priority by one step, saturating at `High`.
    pub fn escalate(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium | Priority::High => Priority::High,
        }
    }

    /// Raises the priority by `steps` steps.
    pub fn escalate_by(self, steps: u8) -> Self {
        (0..steps).fold(self, |p, _| p.escalate())
    }
}
