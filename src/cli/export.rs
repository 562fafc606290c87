//! Handler for the `export` command.
//!
//! Serializes a simulated sprint to a CSV file: fixed header row, one
//! row per risk in display order, timestamped filename unless an
//! explicit output path is given.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::cli::simulate::run_sprint;
use crate::cli::{output, ExportArgs};
use crate::config::Config;
use crate::domain::Risk;
use crate::error::Result;

/// Fixed CSV header, matching the flattened record field order.
pub const CSV_HEADER: &str = "Type,Description,Probability,Impact,Priority,Category,Mitigation";

/// Execute the export command.
pub fn execute(args: &ExportArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    config.logging.init();

    let risks = run_sprint(&config, args.count, args.seed)?;
    let csv = render_csv(&risks);

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| timestamped_path(&config.export.directory));
    std::fs::write(&path, &csv)?;
    info!(path = %path.display(), rows = risks.len(), "sprint exported");

    output::success("Export complete");
    output::field("Risks", risks.len());
    output::field("Path", path.display());

    Ok(())
}

/// Render risk records as CSV, in generation order.
#[must_use]
pub fn render_csv(risks: &[Risk]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for risk in risks {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            escape(risk.risk_type().label()),
            escape(risk.description()),
            risk.probability(),
            risk.impact(),
            risk.priority().value(),
            risk.priority().category(),
            escape(risk.mitigation()),
        ));
    }

    csv
}

/// Quote a field when it would break the row otherwise.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn timestamped_path(directory: &Path) -> PathBuf {
    directory.join(format!(
        "sprint_risks_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, RiskType};

    fn make_risk(description: &str, mitigation: &str) -> Risk {
        Risk::new(
            RiskType::Planning,
            description.to_string(),
            5,
            7,
            Priority::calculate(5, 7).unwrap(),
            mitigation.to_string(),
        )
    }

    #[test]
    fn header_matches_display_order() {
        let csv = render_csv(&[]);

        assert_eq!(
            csv,
            "Type,Description,Probability,Impact,Priority,Category,Mitigation\n"
        );
    }

    #[test]
    fn rows_follow_the_header_in_order() {
        let risks = vec![
            make_risk("Incorrect estimates", "Review weekly"),
            make_risk("Overcommitment", "Assign an owner"),
        ];

        let csv = render_csv(&risks);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Planning,Incorrect estimates,5,7,35,medium,Review weekly"
        );
        assert_eq!(lines[2], "Planning,Overcommitment,5,7,35,medium,Assign an owner");
    }

    #[test]
    fn fields_with_commas_or_quotes_are_quoted() {
        let risks = vec![make_risk("Scope creep, again", "Say \"no\" more often")];

        let csv = render_csv(&risks);

        assert!(csv.contains("\"Scope creep, again\""));
        assert!(csv.contains("\"Say \"\"no\"\" more often\""));
    }
}
