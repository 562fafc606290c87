//! Presentation-agnostic domain types.

pub mod error;
mod priority;
mod risk;
mod risk_type;
mod stats;

pub use error::EngineError;
pub use priority::{Priority, PriorityCategory, MAX_RATING, MIN_RATING};
pub use risk::Risk;
pub use risk_type::RiskType;
pub use stats::SprintSummary;
