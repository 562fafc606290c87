//! The risk generation engine.
//!
//! Owns the static reference tables ([`RiskCatalog`]), samples and
//! scores individual risks, and batches them into sprint-sized lists
//! ([`RiskEngine`]). [`selftest`] exposes the invariant probes the CLI
//! reports on.

mod catalog;
mod generator;
pub mod selftest;

pub use catalog::{CatalogError, RiskCatalog};
pub use generator::{RiskDraw, RiskEngine};
