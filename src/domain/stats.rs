//! Sprint summary statistics.
//!
//! Straightforward reductions over a sprint's risk records, consumed by
//! the CLI summary block.

use super::priority::PriorityCategory;
use super::risk::Risk;

/// Aggregate statistics for one simulated sprint.
#[derive(Debug, Clone, Default)]
pub struct SprintSummary {
    total: usize,
    low_count: usize,
    medium_count: usize,
    high_count: usize,
    priority_sum: u64,
    most_critical: Option<Risk>,
}

impl SprintSummary {
    /// Reduce a sprint's records into summary statistics.
    #[must_use]
    pub fn from_risks(risks: &[Risk]) -> Self {
        let mut summary = Self {
            total: risks.len(),
            ..Self::default()
        };

        for risk in risks {
            match risk.priority().category() {
                PriorityCategory::Low => summary.low_count += 1,
                PriorityCategory::Medium => summary.medium_count += 1,
                PriorityCategory::High => summary.high_count += 1,
            }
            summary.priority_sum += u64::from(risk.priority().value());

            let is_new_max = summary
                .most_critical
                .as_ref()
                .map_or(true, |current| {
                    risk.priority().value() > current.priority().value()
                });
            if is_new_max {
                summary.most_critical = Some(risk.clone());
            }
        }

        summary
    }

    /// Total number of risks in the sprint.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of risks in the given category.
    #[must_use]
    pub const fn count(&self, category: PriorityCategory) -> usize {
        match category {
            PriorityCategory::Low => self.low_count,
            PriorityCategory::Medium => self.medium_count,
            PriorityCategory::High => self.high_count,
        }
    }

    /// Share of the sprint in the given category, as a percentage.
    ///
    /// Returns 0.0 for an empty sprint.
    #[must_use]
    pub fn percentage(&self, category: PriorityCategory) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(category) as f64 / self.total as f64 * 100.0
        }
    }

    /// Mean priority value across the sprint, 0.0 when empty.
    #[must_use]
    pub fn mean_priority(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.priority_sum as f64 / self.total as f64
        }
    }

    /// The record with the highest priority value, if any.
    ///
    /// Ties keep the earliest record in generation order.
    #[must_use]
    pub const fn most_critical(&self) -> Option<&Risk> {
        self.most_critical.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::priority::Priority;
    use crate::domain::risk_type::RiskType;

    fn make_risk(probability: u8, impact: u8, description: &str) -> Risk {
        let priority = Priority::calculate(probability, impact).unwrap();
        Risk::new(
            RiskType::Technical,
            description.to_string(),
            probability,
            impact,
            priority,
            "Monitor the risk".to_string(),
        )
    }

    #[test]
    fn empty_sprint_yields_zeroed_summary() {
        let summary = SprintSummary::from_risks(&[]);

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.mean_priority(), 0.0);
        assert_eq!(summary.percentage(PriorityCategory::High), 0.0);
        assert!(summary.most_critical().is_none());
    }

    #[test]
    fn counts_and_percentages_per_category() {
        let risks = vec![
            make_risk(2, 3, "a"),  // 6, low
            make_risk(5, 7, "b"),  // 35, medium
            make_risk(9, 9, "c"),  // 81, high
            make_risk(10, 8, "d"), // 80, high
        ];

        let summary = SprintSummary::from_risks(&risks);

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.count(PriorityCategory::Low), 1);
        assert_eq!(summary.count(PriorityCategory::Medium), 1);
        assert_eq!(summary.count(PriorityCategory::High), 2);
        assert!((summary.percentage(PriorityCategory::High) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_priority_averages_values() {
        let risks = vec![make_risk(2, 5, "a"), make_risk(4, 5, "b")]; // 10, 20

        let summary = SprintSummary::from_risks(&risks);

        assert!((summary.mean_priority() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn most_critical_keeps_first_on_ties() {
        let risks = vec![
            make_risk(9, 9, "first"),
            make_risk(9, 9, "second"),
            make_risk(1, 1, "third"),
        ];

        let summary = SprintSummary::from_risks(&risks);

        assert_eq!(summary.most_critical().unwrap().description(), "first");
    }
}
