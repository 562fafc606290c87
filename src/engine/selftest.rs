//! Engine self-test suite.
//!
//! A set of invariant probes the CLI can run on demand (`sprintrisk
//! check engine`) and report as per-check pass/fail plus totals. The
//! checks mirror the engine's contract: the classification table, the
//! band boundaries, out-of-range rejection, category parsing, batch
//! length, record consistency, and classification determinism.

use crate::domain::{Priority, PriorityCategory, MAX_RATING, MIN_RATING};

use super::catalog::RiskCatalog;
use super::generator::RiskEngine;

/// Result of one self-test probe.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    name: &'static str,
    failure: Option<String>,
}

impl CheckOutcome {
    /// The probe's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the probe passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// Failure detail, when the probe failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

/// Aggregated self-test results.
#[derive(Debug, Clone)]
pub struct SelftestReport {
    outcomes: Vec<CheckOutcome>,
}

impl SelftestReport {
    /// All probe outcomes, in execution order.
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Number of passing probes.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failing probes.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every probe passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run the full self-test suite with a deterministic engine.
#[must_use]
pub fn run(seed: u64) -> SelftestReport {
    let checks: [(&'static str, fn(u64) -> Option<String>); 7] = [
        ("priority grid", check_priority_grid),
        ("band boundaries", check_band_boundaries),
        ("out-of-range rejection", check_out_of_range),
        ("category parsing", check_category_parsing),
        ("sprint length", check_sprint_length),
        ("record consistency", check_record_consistency),
        ("classification determinism", check_determinism),
    ];

    SelftestReport {
        outcomes: checks
            .into_iter()
            .map(|(name, probe)| CheckOutcome {
                name,
                failure: probe(seed),
            })
            .collect(),
    }
}

fn check_priority_grid(_seed: u64) -> Option<String> {
    for probability in MIN_RATING..=MAX_RATING {
        for impact in MIN_RATING..=MAX_RATING {
            match Priority::calculate(probability, impact) {
                Ok(priority) if priority.value() == probability * impact => {}
                Ok(priority) => {
                    return Some(format!(
                        "({probability}, {impact}) scored {} instead of {}",
                        priority.value(),
                        probability * impact
                    ))
                }
                Err(error) => return Some(format!("({probability}, {impact}) failed: {error}")),
            }
        }
    }
    None
}

fn check_band_boundaries(_seed: u64) -> Option<String> {
    let cases = [
        (5, 6, PriorityCategory::Low),
        (5, 7, PriorityCategory::Medium),
        (7, 10, PriorityCategory::Medium),
        (8, 9, PriorityCategory::High),
        (1, 1, PriorityCategory::Low),
        (10, 10, PriorityCategory::High),
    ];

    for (probability, impact, expected) in cases {
        match Priority::calculate(probability, impact) {
            Ok(priority) if priority.category() == expected => {}
            Ok(priority) => {
                return Some(format!(
                    "({probability}, {impact}) classified {} instead of {}",
                    priority.category(),
                    expected
                ))
            }
            Err(error) => return Some(format!("({probability}, {impact}) failed: {error}")),
        }
    }
    None
}

fn check_out_of_range(_seed: u64) -> Option<String> {
    for (probability, impact) in [(0, 5), (11, 5), (5, 0), (5, 11)] {
        if Priority::calculate(probability, impact).is_ok() {
            return Some(format!("({probability}, {impact}) was accepted"));
        }
    }
    None
}

fn check_category_parsing(_seed: u64) -> Option<String> {
    for category in PriorityCategory::ALL {
        match category.label().parse::<PriorityCategory>() {
            Ok(parsed) if parsed == category => {}
            _ => return Some(format!("label '{}' did not round-trip", category.label())),
        }
    }
    if "critical".parse::<PriorityCategory>().is_ok() {
        return Some("unknown label 'critical' was accepted".to_string());
    }
    None
}

fn check_sprint_length(seed: u64) -> Option<String> {
    let mut engine = RiskEngine::seeded(RiskCatalog::default(), seed);

    for count in [0usize, 1, 5, 20] {
        match engine.simulate_sprint(count) {
            Ok(risks) if risks.len() == count => {}
            Ok(risks) => {
                return Some(format!("requested {count} risks, got {}", risks.len()))
            }
            Err(error) => return Some(format!("sprint of {count} failed: {error}")),
        }
    }
    None
}

fn check_record_consistency(seed: u64) -> Option<String> {
    let mut engine = RiskEngine::seeded(RiskCatalog::default(), seed);
    let risks = match engine.simulate_sprint(25) {
        Ok(risks) => risks,
        Err(error) => return Some(format!("sprint failed: {error}")),
    };

    for risk in &risks {
        let expected = match Priority::calculate(risk.probability(), risk.impact()) {
            Ok(priority) => priority,
            Err(error) => return Some(format!("rescoring failed: {error}")),
        };
        if risk.priority() != expected {
            return Some(format!(
                "record priority {} does not match recomputed {}",
                risk.priority().value(),
                expected.value()
            ));
        }
        if !engine
            .catalog()
            .mitigations(risk.priority().category())
            .iter()
            .any(|m| m == risk.mitigation())
        {
            return Some(format!(
                "mitigation '{}' is not in the {} list",
                risk.mitigation(),
                risk.priority().category()
            ));
        }
        if !engine
            .catalog()
            .descriptions(risk.risk_type())
            .iter()
            .any(|d| d == risk.description())
        {
            return Some(format!(
                "description '{}' is not in the {} list",
                risk.description(),
                risk.risk_type()
            ));
        }
    }
    None
}

fn check_determinism(seed: u64) -> Option<String> {
    let first = RiskEngine::seeded(RiskCatalog::default(), seed).simulate_sprint(3);
    let second = RiskEngine::seeded(RiskCatalog::default(), seed).simulate_sprint(3);

    match (first, second) {
        (Ok(first), Ok(second)) if first == second => None,
        (Ok(_), Ok(_)) => Some("same seed produced different sprints".to_string()),
        (Err(error), _) | (_, Err(error)) => Some(format!("sprint failed: {error}")),
    }
}
