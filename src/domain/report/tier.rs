//! Report tiers and the content budget each one buys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;

/// Closed set of service tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTier {
    Basic,
    Standard,
    Comprehensive,
    Enterprise,
}

impl ReportTier {
    pub const ALL: [ReportTier; 4] = [
        ReportTier::Basic,
        ReportTier::Standard,
        ReportTier::Comprehensive,
        ReportTier::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTier::Basic => "basic",
            ReportTier::Standard => "standard",
            ReportTier::Comprehensive => "comprehensive",
            ReportTier::Enterprise => "enterprise",
        }
    }

    /// Returns the numeric rank (higher = more content).
    pub fn rank(&self) -> u8 {
        match self {
            ReportTier::Basic => 0,
            ReportTier::Standard => 1,
            ReportTier::Comprehensive => 2,
            ReportTier::Enterprise => 3,
        }
    }
}

impl fmt::Display for ReportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTier {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ReportTier::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ConfigurationError::UnknownTier(s.to_string()))
    }
}

/// How deep the narrative analysis goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Basic,
    Standard,
    Comprehensive,
    Enterprise,
}

impl AnalysisDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisDepth::Basic => "basic",
            AnalysisDepth::Standard => "standard",
            AnalysisDepth::Comprehensive => "comprehensive",
            AnalysisDepth::Enterprise => "enterprise",
        }
    }

    /// Number of priorities and risks a section should surface.
    pub fn priority_count(&self) -> usize {
        match self {
            AnalysisDepth::Basic => 3,
            AnalysisDepth::Standard => 5,
            AnalysisDepth::Comprehensive | AnalysisDepth::Enterprise => 7,
        }
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sections beyond the core three that a tier may unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalSection {
    Benchmarking,
    FinancialProjections,
    ChangeManagement,
}

/// Content budget for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    pub tier: ReportTier,
    /// Narrative sections requested, not counting organizational structure.
    pub target_section_count: usize,
    pub target_pages: u32,
    pub max_tokens_per_section: u32,
    pub analysis_depth: AnalysisDepth,
    pub optional_sections: BTreeSet<OptionalSection>,
}

impl TierConfig {
    /// Number of core sections every tier receives.
    pub const CORE_SECTION_COUNT: usize = 3;

    /// Looks up the budget for a tier.
    ///
    /// | Tier | Sections | Pages | Tokens | Depth | Optional |
    /// |------|----------|-------|--------|-------|----------|
    /// | basic | 3 | 25 | 1500 | basic | none |
    /// | standard | 4 | 35 | 2000 | standard | benchmarking |
    /// | comprehensive | 6 | 45 | 2500 | comprehensive | all |
    /// | enterprise | 6 | 55 | 3000 | enterprise | all |
    pub fn for_tier(tier: ReportTier) -> Self {
        use OptionalSection::*;

        let (target_pages, max_tokens_per_section, analysis_depth, optional): (u32, u32, AnalysisDepth, &[OptionalSection]) =
            match tier {
                ReportTier::Basic => (25, 1500, AnalysisDepth::Basic, &[]),
                ReportTier::Standard => (35, 2000, AnalysisDepth::Standard, &[Benchmarking]),
                ReportTier::Comprehensive => (
                    45,
                    2500,
                    AnalysisDepth::Comprehensive,
                    &[Benchmarking, FinancialProjections, ChangeManagement],
                ),
                ReportTier::Enterprise => (
                    55,
                    3000,
                    AnalysisDepth::Enterprise,
                    &[Benchmarking, FinancialProjections, ChangeManagement],
                ),
            };

        let optional_sections: BTreeSet<OptionalSection> = optional.iter().copied().collect();
        Self {
            tier,
            target_section_count: Self::CORE_SECTION_COUNT + optional_sections.len(),
            target_pages,
            max_tokens_per_section,
            analysis_depth,
            optional_sections,
        }
    }

    pub fn includes(&self, section: OptionalSection) -> bool {
        self.optional_sections.contains(&section)
    }

    /// Pages a section should fill, given its share of the report.
    pub fn pages_for_share(&self, share: f64) -> u32 {
        (f64::from(self.target_pages) * share).floor() as u32
    }
}
