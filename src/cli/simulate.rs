//! Handler for the `simulate` command.

use tabled::{Table, Tabled};
use tracing::info;

use crate::cli::{output, SimulateArgs};
use crate::config::Config;
use crate::domain::{PriorityCategory, Risk, SprintSummary};
use crate::engine::{RiskCatalog, RiskEngine};
use crate::error::Result;

/// One row of the rendered risk table, in display column order.
#[derive(Tabled)]
struct RiskRow {
    #[tabled(rename = "Type")]
    risk_type: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Probability")]
    probability: u8,
    #[tabled(rename = "Impact")]
    impact: u8,
    #[tabled(rename = "Priority")]
    priority: u8,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Mitigation")]
    mitigation: String,
}

impl RiskRow {
    fn from_risk(risk: &Risk) -> Self {
        Self {
            risk_type: risk.risk_type().label(),
            description: risk.description().to_string(),
            probability: risk.probability(),
            impact: risk.impact(),
            priority: risk.priority().value(),
            category: output::category_label(risk.priority().category()),
            mitigation: risk.mitigation().to_string(),
        }
    }
}

/// Execute the simulate command.
pub fn execute(args: &SimulateArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    config.logging.init();

    let risks = run_sprint(&config, args.count, args.seed)?;

    if output::is_json() {
        for risk in &risks {
            output::json_output(serde_json::to_value(risk)?);
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    render_table(&risks);
    render_summary(&SprintSummary::from_risks(&risks));

    Ok(())
}

/// Build an engine from config plus CLI overrides and run one sprint.
pub(crate) fn run_sprint(
    config: &Config,
    count_override: Option<u8>,
    seed_override: Option<u64>,
) -> Result<Vec<Risk>> {
    let count = usize::from(count_override.unwrap_or(config.simulation.risks_per_sprint));
    let seed = seed_override.or(config.simulation.seed);

    let mut engine = match seed {
        Some(seed) => RiskEngine::seeded(RiskCatalog::default(), seed),
        None => RiskEngine::new(RiskCatalog::default()),
    };

    let risks = engine.simulate_sprint(count)?;
    info!(count, seeded = seed.is_some(), "sprint simulated");
    Ok(risks)
}

const fn band_title(category: PriorityCategory) -> &'static str {
    match category {
        PriorityCategory::Low => "Low",
        PriorityCategory::Medium => "Medium",
        PriorityCategory::High => "High",
    }
}

fn render_table(risks: &[Risk]) {
    let rows: Vec<RiskRow> = risks.iter().map(RiskRow::from_risk).collect();
    let table = Table::new(rows).to_string();
    output::lines(&table);
}

fn render_summary(summary: &SprintSummary) {
    output::section("Sprint Summary");
    output::field("Total risks", summary.total());

    // Most severe band first, mirroring how teams triage.
    for category in PriorityCategory::ALL.iter().rev() {
        output::field(
            band_title(*category),
            format!(
                "{} ({:.0}%)",
                summary.count(*category),
                summary.percentage(*category)
            ),
        );
    }
    output::field("Mean priority", format!("{:.1}", summary.mean_priority()));

    if let Some(risk) = summary.most_critical() {
        output::section("Most critical risk");
        output::field("Description", risk.description());
        output::field(
            "Priority",
            format!(
                "{} ({})",
                risk.priority().value(),
                output::category_label(risk.priority().category())
            ),
        );
        output::field("Mitigation", risk.mitigation());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::domain::RiskType;

    #[test]
    fn row_preserves_field_order_and_values() {
        let priority = Priority::calculate(8, 9).unwrap();
        let risk = Risk::new(
            RiskType::External,
            "Supplier problems".to_string(),
            8,
            9,
            priority,
            "Involve stakeholders".to_string(),
        );

        let row = RiskRow::from_risk(&risk);

        assert_eq!(row.risk_type, "External");
        assert_eq!(row.description, "Supplier problems");
        assert_eq!(row.probability, 8);
        assert_eq!(row.impact, 9);
        assert_eq!(row.priority, 72);
        assert_eq!(row.mitigation, "Involve stakeholders");
    }

    #[test]
    fn run_sprint_applies_overrides_over_config() {
        let config = Config::default();

        let risks = run_sprint(&config, Some(7), Some(42)).unwrap();
        let again = run_sprint(&config, Some(7), Some(42)).unwrap();

        assert_eq!(risks.len(), 7);
        assert_eq!(risks, again);
    }

    #[test]
    fn run_sprint_defaults_to_configured_count() {
        let config = Config::default();

        let risks = run_sprint(&config, None, Some(1)).unwrap();

        assert_eq!(risks.len(), usize::from(config.simulation.risks_per_sprint));
    }
}
