//! The risk record produced by a sprint simulation.

use serde::Serialize;

use super::priority::Priority;
use super::risk_type::RiskType;

/// A fully-resolved sprint risk.
///
/// Immutable once assembled; two records with identical fields are
/// equivalent. Field order matches the flattened display order used by
/// tables and file export: type, description, probability, impact,
/// priority value, priority category, mitigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Risk {
    risk_type: RiskType,
    description: String,
    probability: u8,
    impact: u8,
    priority: Priority,
    mitigation: String,
}

impl Risk {
    /// Assemble a record from already-validated parts.
    pub(crate) fn new(
        risk_type: RiskType,
        description: String,
        probability: u8,
        impact: u8,
        priority: Priority,
        mitigation: String,
    ) -> Self {
        Self {
            risk_type,
            description,
            probability,
            impact,
            priority,
            mitigation,
        }
    }

    /// The risk's type.
    #[must_use]
    pub const fn risk_type(&self) -> RiskType {
        self.risk_type
    }

    /// The sampled description for this risk's type.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Probability rating (1..=10).
    #[must_use]
    pub const fn probability(&self) -> u8 {
        self.probability
    }

    /// Impact rating (1..=10).
    #[must_use]
    pub const fn impact(&self) -> u8 {
        self.impact
    }

    /// The computed priority (value and category).
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// The suggested mitigation for this risk's priority category.
    #[must_use]
    pub fn mitigation(&self) -> &str {
        &self.mitigation
    }
}
