//! Risk priority scoring and classification.
//!
//! A risk's priority is the product of its probability and impact
//! ratings (each 1..=10), classified into one of three bands:
//!
//! - 1..=30 → low
//! - 31..=70 → medium
//! - 71..=100 → high
//!
//! Classification is a pure, deterministic function of the priority
//! value; only the rating inputs are validated.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::EngineError;

/// Lowest valid probability or impact rating.
pub const MIN_RATING: u8 = 1;
/// Highest valid probability or impact rating.
pub const MAX_RATING: u8 = 10;

/// Upper bound of the low band (inclusive).
const LOW_MAX: u8 = 30;
/// Upper bound of the medium band (inclusive).
const MEDIUM_MAX: u8 = 70;

/// The priority band a scored risk falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityCategory {
    /// Priority value 1..=30.
    Low,
    /// Priority value 31..=70.
    Medium,
    /// Priority value 71..=100.
    High,
}

impl PriorityCategory {
    /// All categories, from least to most severe.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase label used in tables, files, and parsing.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Classify a priority value into its band.
    ///
    /// The value is assumed to be a product of two valid ratings and is
    /// therefore already in 1..=100.
    const fn for_value(value: u8) -> Self {
        if value <= LOW_MAX {
            Self::Low
        } else if value <= MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriorityCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(EngineError::UnknownCategory {
                category: other.to_string(),
            }),
        }
    }
}

/// A computed priority: the probability × impact product and its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Priority {
    value: u8,
    category: PriorityCategory,
}

impl Priority {
    /// Score a probability/impact pair and classify the result.
    ///
    /// Both ratings must be in 1..=10; out-of-range inputs fail with
    /// [`EngineError::RatingOutOfRange`] before any computation. The
    /// engine only ever passes in-range ratings, but the check stays in
    /// place for every call site.
    pub fn calculate(probability: u8, impact: u8) -> Result<Self, EngineError> {
        let in_range = |rating| (MIN_RATING..=MAX_RATING).contains(&rating);
        if !in_range(probability) || !in_range(impact) {
            return Err(EngineError::RatingOutOfRange {
                probability,
                impact,
            });
        }

        let value = probability * impact;
        Ok(Self {
            value,
            category: PriorityCategory::for_value(value),
        })
    }

    /// The priority value (probability × impact, 1..=100).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// The band the value falls into.
    #[must_use]
    pub const fn category(&self) -> PriorityCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- classification tests ---

    #[test]
    fn calculate_multiplies_ratings() {
        let priority = Priority::calculate(2, 3).unwrap();

        assert_eq!(priority.value(), 6);
        assert_eq!(priority.category(), PriorityCategory::Low);
    }

    #[test]
    fn band_boundaries_match_thresholds() {
        let cases = [
            (5, 6, 30, PriorityCategory::Low),
            (5, 7, 35, PriorityCategory::Medium),
            (7, 10, 70, PriorityCategory::Medium),
            (8, 9, 72, PriorityCategory::High),
            (1, 1, 1, PriorityCategory::Low),
            (10, 10, 100, PriorityCategory::High),
        ];

        for (probability, impact, value, category) in cases {
            let priority = Priority::calculate(probability, impact).unwrap();
            assert_eq!(priority.value(), value);
            assert_eq!(priority.category(), category);
        }
    }

    #[test]
    fn full_rating_grid_is_consistent() {
        for probability in MIN_RATING..=MAX_RATING {
            for impact in MIN_RATING..=MAX_RATING {
                let priority = Priority::calculate(probability, impact).unwrap();
                let value = probability * impact;

                assert_eq!(priority.value(), value);
                let expected = if value <= 30 {
                    PriorityCategory::Low
                } else if value <= 70 {
                    PriorityCategory::Medium
                } else {
                    PriorityCategory::High
                };
                assert_eq!(priority.category(), expected);
            }
        }
    }

    #[test]
    fn calculate_is_deterministic() {
        assert_eq!(
            Priority::calculate(6, 7).unwrap(),
            Priority::calculate(6, 7).unwrap()
        );
    }

    // --- validation tests ---

    #[test]
    fn out_of_range_ratings_are_rejected() {
        for (probability, impact) in [(0, 5), (11, 5), (5, 0), (5, 11), (0, 0), (11, 11)] {
            let result = Priority::calculate(probability, impact);

            assert_eq!(
                result,
                Err(EngineError::RatingOutOfRange {
                    probability,
                    impact
                })
            );
        }
    }

    #[test]
    fn range_error_names_the_valid_range() {
        let error = Priority::calculate(0, 11).unwrap_err();

        assert!(error.to_string().contains("between 1 and 10"));
    }

    // --- category parsing tests ---

    #[test]
    fn category_parses_known_labels() {
        assert_eq!("low".parse::<PriorityCategory>().unwrap(), PriorityCategory::Low);
        assert_eq!(
            "medium".parse::<PriorityCategory>().unwrap(),
            PriorityCategory::Medium
        );
        assert_eq!("high".parse::<PriorityCategory>().unwrap(), PriorityCategory::High);
    }

    #[test]
    fn category_rejects_unknown_labels() {
        let result = "critical".parse::<PriorityCategory>();

        assert_eq!(
            result,
            Err(EngineError::UnknownCategory {
                category: "critical".to_string()
            })
        );
    }

    #[test]
    fn category_parsing_is_case_sensitive() {
        assert!("Low".parse::<PriorityCategory>().is_err());
    }
}
