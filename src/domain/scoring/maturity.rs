//! Maturity classification by range lookup.
//!
//! A score is classified against an ordered table of bands whose bounds are
//! inclusive on both ends. Adjacent bands may share an edge (e.g. 1.5 closes
//! level 1 and opens level 2); lookup is first-match in table order, so a
//! score sitting exactly on a shared edge resolves to the earlier band.

use serde::{Deserialize, Serialize};

use super::{ScoringError, MAX_SCORE_PER_QUESTION};

/// One row of the maturity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityBand {
    pub min_score: f64,
    pub max_score: f64,
    pub level: u8,
    pub name: String,
    pub description: String,
}

impl MaturityBand {
    pub fn new(
        min_score: f64,
        max_score: f64,
        level: u8,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            min_score,
            max_score,
            level,
            name: name.into(),
            description: description.into(),
        }
    }

    fn contains(&self, score: f64) -> bool {
        score >= self.min_score && score <= self.max_score
    }
}

/// The classification of a single score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityProfile {
    pub level: u8,
    pub name: String,
    pub description: String,
}

impl MaturityProfile {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Sentinel returned when no band matches (NaN or out-of-range input).
    pub fn unknown() -> Self {
        Self {
            level: 1,
            name: Self::UNKNOWN_NAME.to_string(),
            description: "Unable to determine maturity level".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == Self::UNKNOWN_NAME
    }
}

impl From<&MaturityBand> for MaturityProfile {
    fn from(band: &MaturityBand) -> Self {
        Self {
            level: band.level,
            name: band.name.clone(),
            description: band.description.clone(),
        }
    }
}

/// Maps scores on the 0-5 scale to maturity levels.
#[derive(Debug, Clone, PartialEq)]
pub struct MaturityClassifier {
    bands: Vec<MaturityBand>,
}

impl MaturityClassifier {
    /// Builds a classifier from an ordered band table.
    ///
    /// The table must be non-empty, start at 0.0, end at 5.0, ascend, and
    /// leave no gap between consecutive bands. Each band needs finite bounds
    /// with `min_score <= max_score`.
    pub fn new(bands: Vec<MaturityBand>) -> Result<Self, ScoringError> {
        let (first, last) = match (bands.first(), bands.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ScoringError::EmptyMaturityTable),
        };

        if let Some(band) = bands
            .iter()
            .find(|b| !(b.min_score.is_finite() && b.max_score.is_finite() && b.min_score <= b.max_score))
        {
            return Err(ScoringError::InvalidMaturityBand {
                level: band.level,
                min: band.min_score,
                max: band.max_score,
            });
        }

        let upper = f64::from(MAX_SCORE_PER_QUESTION);
        if first.min_score > 0.0 || last.max_score < upper {
            return Err(ScoringError::MaturityTableBounds {
                min: first.min_score,
                max: last.max_score,
            });
        }

        for pair in bands.windows(2) {
            if pair[1].min_score < pair[0].min_score || pair[1].max_score < pair[0].max_score {
                return Err(ScoringError::MaturityTableOrder { level: pair[1].level });
            }
            if pair[1].min_score > pair[0].max_score {
                return Err(ScoringError::MaturityTableGap {
                    previous_max: pair[0].max_score,
                    next_min: pair[1].min_score,
                });
            }
        }

        Ok(Self { bands })
    }

    /// Returns the first band containing `score`, or [`MaturityProfile::unknown`].
    pub fn classify(&self, score: f64) -> MaturityProfile {
        self.bands
            .iter()
            .find(|band| band.contains(score))
            .map(MaturityProfile::from)
            .unwrap_or_else(MaturityProfile::unknown)
    }

    pub fn bands(&self) -> &[MaturityBand] {
        &self.bands
    }
}

impl Default for MaturityClassifier {
    fn default() -> Self {
        Self {
            bands: vec![
                MaturityBand::new(
                    0.0,
                    1.5,
                    1,
                    "Awareness",
                    "AI use is ad hoc and individual; there is little shared strategy, policy or infrastructure.",
                ),
                MaturityBand::new(
                    1.5,
                    2.5,
                    2,
                    "Exploration",
                    "Pilots and interest groups exist, but efforts are fragmented and not yet tied to institutional goals.",
                ),
                MaturityBand::new(
                    2.5,
                    3.5,
                    3,
                    "Implementation",
                    "A strategy and governance structure are in place and AI initiatives are being deployed in several areas.",
                ),
                MaturityBand::new(
                    3.5,
                    4.5,
                    4,
                    "Integration",
                    "AI is embedded in core academic and operational processes with measured outcomes.",
                ),
                MaturityBand::new(
                    4.5,
                    5.0,
                    5,
                    "Transformation",
                    "AI is a strategic differentiator, continuously improved and shaping the institution's mission delivery.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_table_is_valid() {
        let default = MaturityClassifier::default();
        assert!(MaturityClassifier::new(default.bands().to_vec()).is_ok());
    }

    #[test]
    fn classifies_interior_scores() {
        let classifier = MaturityClassifier::default();
        assert_eq!(classifier.classify(0.0).level, 1);
        assert_eq!(classifier.classify(2.0).level, 2);
        assert_eq!(classifier.classify(3.0).name, "Implementation");
        assert_eq!(classifier.classify(4.0).level, 4);
        assert_eq!(classifier.classify(5.0).level, 5);
    }

    #[test]
    fn shared_edges_resolve_to_first_band() {
        let classifier = MaturityClassifier::default();
        assert_eq!(classifier.classify(1.5).level, 1);
        assert_eq!(classifier.classify(2.5).level, 2);
        assert_eq!(classifier.classify(3.5).level, 3);
        assert_eq!(classifier.classify(4.5).level, 4);
    }

    #[test]
    fn out_of_range_scores_are_unknown() {
        let classifier = MaturityClassifier::default();
        assert!(classifier.classify(-0.1).is_unknown());
        assert!(classifier.classify(5.01).is_unknown());
        assert!(classifier.classify(f64::NAN).is_unknown());
        assert_eq!(classifier.classify(7.0).level, 1);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(MaturityClassifier::new(vec![]), Err(ScoringError::EmptyMaturityTable));
    }

    #[test]
    fn table_with_gap_is_rejected() {
        let bands = vec![
            MaturityBand::new(0.0, 2.0, 1, "Low", ""),
            MaturityBand::new(2.5, 5.0, 2, "High", ""),
        ];
        assert!(matches!(
            MaturityClassifier::new(bands),
            Err(ScoringError::MaturityTableGap { .. })
        ));
    }

    #[test]
    fn table_not_reaching_five_is_rejected() {
        let bands = vec![MaturityBand::new(0.0, 4.0, 1, "Partial", "")];
        assert!(matches!(
            MaturityClassifier::new(bands),
            Err(ScoringError::MaturityTableBounds { .. })
        ));
    }

    #[test]
    fn inverted_band_is_rejected() {
        let bands = vec![
            MaturityBand::new(0.0, 2.5, 1, "Low", ""),
            MaturityBand::new(4.0, 2.5, 2, "Backwards", ""),
            MaturityBand::new(2.5, 5.0, 3, "High", ""),
        ];
        assert_eq!(
            MaturityClassifier::new(bands),
            Err(ScoringError::InvalidMaturityBand {
                level: 2,
                min: 4.0,
                max: 2.5
            })
        );
    }

    #[test]
    fn nan_bound_is_rejected() {
        let bands = vec![MaturityBand::new(0.0, f64::NAN, 1, "Broken", "")];
        assert!(matches!(
            MaturityClassifier::new(bands),
            Err(ScoringError::InvalidMaturityBand { level: 1, .. })
        ));
    }

    #[test]
    fn descending_table_is_rejected() {
        let bands = vec![
            MaturityBand::new(0.0, 5.0, 1, "Everything", ""),
            MaturityBand::new(2.0, 3.0, 2, "Shadowed", ""),
            MaturityBand::new(1.0, 5.0, 3, "Late", ""),
        ];
        assert_eq!(
            MaturityClassifier::new(bands),
            Err(ScoringError::MaturityTableOrder { level: 2 })
        );
    }

    proptest! {
        #[test]
        fn every_score_in_range_has_a_level(score in 0.0f64..=5.0) {
            let profile = MaturityClassifier::default().classify(score);
            prop_assert!(!profile.is_unknown());
            prop_assert!((1..=5).contains(&profile.level));
        }
    }
}
