//! Catalog listing.

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::{PriorityCategory, RiskType};
use crate::engine::RiskCatalog;
use crate::error::Result;

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    name: &'static str,
    #[tabled(rename = "Descriptions")]
    descriptions: usize,
    #[tabled(rename = "Example")]
    example: String,
}

/// List the risk types and mitigation tables.
pub fn execute() -> Result<()> {
    let catalog = RiskCatalog::default();

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Risk types");

    let rows: Vec<TypeRow> = RiskType::ALL
        .iter()
        .map(|risk_type| {
            let descriptions = catalog.descriptions(*risk_type);
            TypeRow {
                name: risk_type.label(),
                descriptions: descriptions.len(),
                example: descriptions[0].clone(),
            }
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    for category in PriorityCategory::ALL {
        output::section(&format!("Mitigations ({})", output::category_label(category)));
        for mitigation in catalog.mitigations(category) {
            output::note(mitigation);
        }
    }

    println!();
    output::hint(&format!(
        "run {} to generate a sprint",
        output::highlight("sprintrisk simulate")
    ));

    Ok(())
}
