//! The static risk catalog.
//!
//! Reference tables for the engine: a description list per risk type
//! and a mitigation list per priority category. The catalog is
//! immutable once constructed and shared read-only by all generation
//! calls. The compiled-in reference data carries five entries per list;
//! any non-empty list is accepted.

use thiserror::Error;

use crate::domain::{PriorityCategory, RiskType};

/// Errors raised when catalog invariants are violated at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Every risk type must map to at least one description.
    #[error("description list for {risk_type} risks cannot be empty")]
    EmptyDescriptions {
        /// The risk type with no descriptions.
        risk_type: RiskType,
    },

    /// Every priority category must map to at least one mitigation.
    #[error("mitigation list for {category} priority cannot be empty")]
    EmptyMitigations {
        /// The category with no mitigations.
        category: PriorityCategory,
    },
}

const TECHNICAL_DESCRIPTIONS: &[&str] = &[
    "Outdated dependencies",
    "Integration problems",
    "Unforeseen technical difficulties",
    "Missing technical expertise",
    "Unproven technology",
];

const ORGANIZATIONAL_DESCRIPTIONS: &[&str] = &[
    "Change in assigned resources",
    "Communication problems",
    "Lack of team commitment",
    "Internal conflicts",
    "Staff turnover",
];

const EXTERNAL_DESCRIPTIONS: &[&str] = &[
    "Regulatory changes",
    "Supplier problems",
    "Market factors",
    "Economic conditions",
    "Legal issues",
];

const REQUIREMENTS_DESCRIPTIONS: &[&str] = &[
    "Changing requirements",
    "Ambiguous requirements",
    "Over-engineering",
    "Unclear objectives",
    "Unrealistic expectations",
];

const PLANNING_DESCRIPTIONS: &[&str] = &[
    "Incorrect estimates",
    "Overcommitment",
    "Lack of prioritization",
    "Unaccounted external dependencies",
    "Unrealistic deadlines",
];

const LOW_MITIGATIONS: &[&str] = &[
    "Monitor the risk",
    "Document the risk",
    "Review next sprint",
    "Assign an owner for follow-up",
    "Add to backlog for future review",
];

const MEDIUM_MITIGATIONS: &[&str] = &[
    "Assign an owner",
    "Draft a specific action plan",
    "Review weekly",
    "Allocate additional resources",
    "Run a detailed impact analysis",
];

const HIGH_MITIGATIONS: &[&str] = &[
    "Immediate action required",
    "Involve stakeholders",
    "Replan the sprint if necessary",
    "Call an emergency meeting",
    "Reassign resources with priority",
];

/// Reference tables the engine samples from.
#[derive(Debug, Clone)]
pub struct RiskCatalog {
    descriptions: [Vec<String>; RiskType::ALL.len()],
    mitigations: [Vec<String>; PriorityCategory::ALL.len()],
}

impl RiskCatalog {
    /// Build a catalog from custom tables.
    ///
    /// `descriptions` and `mitigations` are ordered to match
    /// [`RiskType::ALL`] and [`PriorityCategory::ALL`]. Every list must
    /// be non-empty.
    pub fn try_new(
        descriptions: [Vec<String>; RiskType::ALL.len()],
        mitigations: [Vec<String>; PriorityCategory::ALL.len()],
    ) -> Result<Self, CatalogError> {
        for (risk_type, list) in RiskType::ALL.iter().zip(descriptions.iter()) {
            if list.is_empty() {
                return Err(CatalogError::EmptyDescriptions {
                    risk_type: *risk_type,
                });
            }
        }
        for (category, list) in PriorityCategory::ALL.iter().zip(mitigations.iter()) {
            if list.is_empty() {
                return Err(CatalogError::EmptyMitigations {
                    category: *category,
                });
            }
        }

        Ok(Self {
            descriptions,
            mitigations,
        })
    }

    /// Descriptions for the given risk type. Never empty.
    #[must_use]
    pub fn descriptions(&self, risk_type: RiskType) -> &[String] {
        &self.descriptions[type_index(risk_type)]
    }

    /// Mitigations for the given priority category. Never empty.
    #[must_use]
    pub fn mitigations(&self, category: PriorityCategory) -> &[String] {
        &self.mitigations[category_index(category)]
    }
}

impl Default for RiskCatalog {
    /// The compiled-in reference catalog.
    fn default() -> Self {
        let owned = |table: &[&str]| table.iter().map(|s| (*s).to_string()).collect();
        Self {
            descriptions: [
                owned(TECHNICAL_DESCRIPTIONS),
                owned(ORGANIZATIONAL_DESCRIPTIONS),
                owned(EXTERNAL_DESCRIPTIONS),
                owned(REQUIREMENTS_DESCRIPTIONS),
                owned(PLANNING_DESCRIPTIONS),
            ],
            mitigations: [
                owned(LOW_MITIGATIONS),
                owned(MEDIUM_MITIGATIONS),
                owned(HIGH_MITIGATIONS),
            ],
        }
    }
}

/// Position of a risk type in [`RiskType::ALL`].
const fn type_index(risk_type: RiskType) -> usize {
    match risk_type {
        RiskType::Technical => 0,
        RiskType::Organizational => 1,
        RiskType::External => 2,
        RiskType::Requirements => 3,
        RiskType::Planning => 4,
    }
}

/// Position of a category in [`PriorityCategory::ALL`].
const fn category_index(category: PriorityCategory) -> usize {
    match category {
        PriorityCategory::Low => 0,
        PriorityCategory::Medium => 1,
        PriorityCategory::High => 2,
    }
}
