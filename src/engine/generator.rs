//! Risk generation and the sprint batch driver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{EngineError, Priority, PriorityCategory, Risk, RiskType, MAX_RATING, MIN_RATING};

use super::catalog::RiskCatalog;

/// An unscored risk fresh out of the sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskDraw {
    /// The sampled risk type.
    pub risk_type: RiskType,
    /// A description drawn from that type's catalog list.
    pub description: String,
    /// Probability rating, uniform over 1..=10.
    pub probability: u8,
    /// Impact rating, uniform over 1..=10.
    pub impact: u8,
}

/// The risk engine: samples risks from the catalog, scores them, and
/// batches them into sprints.
///
/// The random source is owned by the engine rather than shared process
/// state, so tests inject a seeded source and concurrent hosts give
/// each caller its own engine.
#[derive(Debug)]
pub struct RiskEngine<R = StdRng> {
    catalog: RiskCatalog,
    rng: R,
}

impl RiskEngine<StdRng> {
    /// Engine over the given catalog, seeded from OS entropy.
    #[must_use]
    pub fn new(catalog: RiskCatalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Fully deterministic engine for reproducible runs.
    #[must_use]
    pub fn seeded(catalog: RiskCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RiskEngine<R> {
    /// Engine with an explicit random source.
    #[must_use]
    pub fn with_rng(catalog: RiskCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// The catalog this engine samples from.
    #[must_use]
    pub fn catalog(&self) -> &RiskCatalog {
        &self.catalog
    }

    /// Sample a single unscored risk.
    ///
    /// Type and description are uniform over the catalog; probability
    /// and impact are independently uniform over 1..=10. The only side
    /// effect is advancing the engine's random source.
    pub fn draw_risk(&mut self) -> RiskDraw {
        let risk_type = RiskType::ALL[self.rng.gen_range(0..RiskType::ALL.len())];
        let descriptions = self.catalog.descriptions(risk_type);
        let description = descriptions[self.rng.gen_range(0..descriptions.len())].clone();

        RiskDraw {
            risk_type,
            description,
            probability: self.rng.gen_range(MIN_RATING..=MAX_RATING),
            impact: self.rng.gen_range(MIN_RATING..=MAX_RATING),
        }
    }

    /// Pick a mitigation uniformly from the given category's list.
    pub fn suggest_mitigation(&mut self, category: PriorityCategory) -> String {
        let mitigations = self.catalog.mitigations(category);
        mitigations[self.rng.gen_range(0..mitigations.len())].clone()
    }

    /// Generate a sprint's worth of fully-resolved risks.
    ///
    /// Records are returned in generation order and each independently
    /// satisfies the record invariants. A count of zero yields an empty
    /// vector. The batch is all-or-nothing: any scoring error aborts
    /// the whole run.
    pub fn simulate_sprint(&mut self, count: usize) -> Result<Vec<Risk>, EngineError> {
        let mut risks = Vec::with_capacity(count);

        for _ in 0..count {
            let draw = self.draw_risk();
            let priority = Priority::calculate(draw.probability, draw.impact)?;
            let mitigation = self.suggest_mitigation(priority.category());

            risks.push(Risk::new(
                draw.risk_type,
                draw.description,
                draw.probability,
                draw.impact,
                priority,
                mitigation,
            ));
        }

        Ok(risks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine(seed: u64) -> RiskEngine {
        RiskEngine::seeded(RiskCatalog::default(), seed)
    }

    #[test]
    fn draw_stays_within_declared_domains() {
        let mut engine = seeded_engine(7);

        for _ in 0..200 {
            let draw = engine.draw_risk();

            assert!((1..=10).contains(&draw.probability));
            assert!((1..=10).contains(&draw.impact));
            assert!(engine
                .catalog()
                .descriptions(draw.risk_type)
                .contains(&draw.description));
        }
    }

    #[test]
    fn suggested_mitigation_belongs_to_category_list() {
        let mut engine = seeded_engine(7);

        for category in PriorityCategory::ALL {
            let mitigation = engine.suggest_mitigation(category);
            assert!(engine
                .catalog()
                .mitigations(category)
                .contains(&mitigation));
        }
    }

    #[test]
    fn sprint_has_requested_length() {
        let mut engine = seeded_engine(3);

        for count in [0, 1, 5, 20] {
            assert_eq!(engine.simulate_sprint(count).unwrap().len(), count);
        }
    }

    #[test]
    fn sprint_records_are_internally_consistent() {
        let mut engine = seeded_engine(11);
        let risks = engine.simulate_sprint(50).unwrap();

        for risk in &risks {
            let expected = Priority::calculate(risk.probability(), risk.impact()).unwrap();
            assert_eq!(risk.priority(), expected);
            assert!(engine
                .catalog()
                .mitigations(risk.priority().category())
                .contains(&risk.mitigation().to_string()));
            assert!(engine
                .catalog()
                .descriptions(risk.risk_type())
                .contains(&risk.description().to_string()));
        }
    }

    #[test]
    fn same_seed_reproduces_the_sprint() {
        let first = seeded_engine(42).simulate_sprint(3).unwrap();
        let second = seeded_engine(42).simulate_sprint(3).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }
}
