//! Sprintrisk - sprint risk simulation and prioritization.
//!
//! This crate generates random sprint risks for agile teams, scores
//! each by probability × impact, classifies the score into a
//! low/medium/high priority band, and suggests a canned mitigation
//! keyed by that band.
//!
//! # Architecture
//!
//! - **`engine`** - The risk engine: the static [`engine::RiskCatalog`]
//!   reference tables, the [`engine::RiskEngine`] sampler and sprint
//!   batch driver, and the `selftest` invariant probes.
//! - **`domain`** - Value objects shared between the engine and its
//!   consumers: [`domain::Risk`], [`domain::Priority`],
//!   [`domain::PriorityCategory`], [`domain::SprintSummary`].
//! - **`cli`** - The presentation layer: table rendering, summary
//!   statistics, CSV export, and diagnostics as `clap` subcommands.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Risk records, priority scoring, summary statistics
//! - [`engine`] - Catalog, generation, and self-test
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use sprintrisk::engine::{RiskCatalog, RiskEngine};
//!
//! let mut engine = RiskEngine::seeded(RiskCatalog::default(), 42);
//! let risks = engine.simulate_sprint(5)?;
//!
//! assert_eq!(risks.len(), 5);
//! # Ok::<(), sprintrisk::domain::EngineError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
