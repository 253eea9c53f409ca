//! Domain weight table used for the overall score.

use serde::Serialize;
use std::collections::BTreeMap;

use super::ScoringError;
use crate::domain::foundation::DomainId;

/// Tolerance allowed when checking that weights sum to 1.0.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Validated weight per domain.
///
/// Invariant: every [`DomainId`] has a finite, non-negative weight and the
/// weights sum to 1.0 within [`WEIGHT_EPSILON`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DomainWeights(BTreeMap<DomainId, f64>);

impl DomainWeights {
    /// Builds a weight table, rejecting tables that break the invariant.
    pub fn new(weights: BTreeMap<DomainId, f64>) -> Result<Self, ScoringError> {
        for domain in DomainId::ALL {
            let weight = *weights.get(&domain).ok_or(ScoringError::MissingWeight(domain))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidWeight { domain, weight });
            }
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ScoringError::InvalidWeightSum { sum });
        }

        Ok(Self(weights))
    }

    /// Weight for a domain.
    pub fn weight(&self, domain: DomainId) -> f64 {
        self.0.get(&domain).copied().unwrap_or(0.0)
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterates weights in canonical domain order.
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, f64)> + '_ {
        self.0.iter().map(|(d, w)| (*d, *w))
    }
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self(DomainId::ALL.iter().map(|d| (*d, d.default_weight())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn uniform() -> BTreeMap<DomainId, f64> {
        DomainId::ALL.iter().map(|d| (*d, 1.0 / 6.0)).collect()
    }

    #[test]
    fn default_weights_are_valid() {
        let weights = DomainWeights::default();
        assert!((weights.sum() - 1.0).abs() < WEIGHT_EPSILON);
        assert_eq!(weights.weight(DomainId::Strategy), 0.20);
        assert!(DomainWeights::new(weights.0.clone()).is_ok());
    }

    #[test]
    fn uniform_weights_are_accepted() {
        assert!(DomainWeights::new(uniform()).is_ok());
    }

    #[test]
    fn missing_domain_is_rejected() {
        let mut weights = uniform();
        weights.remove(&DomainId::Culture);
        assert_eq!(
            DomainWeights::new(weights).unwrap_err(),
            ScoringError::MissingWeight(DomainId::Culture)
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut weights = uniform();
        weights.insert(DomainId::Strategy, -0.1);
        assert!(matches!(
            DomainWeights::new(weights),
            Err(ScoringError::InvalidWeight { domain: DomainId::Strategy, .. })
        ));
    }

    #[test]
    fn weights_not_summing_to_one_are_rejected() {
        let weights = DomainId::ALL.iter().map(|d| (*d, 0.1)).collect();
        assert!(matches!(
            DomainWeights::new(weights),
            Err(ScoringError::InvalidWeightSum { .. })
        ));
    }

    proptest! {
        #[test]
        fn normalized_weights_always_validate(raw in proptest::collection::vec(0.01f64..10.0, 6)) {
            let total: f64 = raw.iter().sum();
            let weights: BTreeMap<DomainId, f64> = DomainId::ALL
                .iter()
                .zip(raw.iter())
                .map(|(d, w)| (*d, w / total))
                .collect();
            let table = DomainWeights::new(weights).unwrap();
            prop_assert!((table.sum() - 1.0).abs() < WEIGHT_EPSILON);
        }
    }
}
