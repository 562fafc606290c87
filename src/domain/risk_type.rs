//! Risk type classification.

use std::fmt;

use serde::Serialize;

/// The kind of sprint risk being described.
///
/// The set is closed: every risk the engine produces belongs to exactly
/// one of these five types, and the catalog carries a description list
/// for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    /// Technology, integration, and expertise risks.
    Technical,
    /// Team, communication, and staffing risks.
    Organizational,
    /// Risks originating outside the team (market, legal, suppliers).
    External,
    /// Requirement clarity and scope risks.
    Requirements,
    /// Estimation and scheduling risks.
    Planning,
}

impl RiskType {
    /// All risk types, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Technical,
        Self::Organizational,
        Self::External,
        Self::Requirements,
        Self::Planning,
    ];

    /// Human-readable label for table and file output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Organizational => "Organizational",
            Self::External => "External",
            Self::Requirements => "Requirements",
            Self::Planning => "Planning",
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
