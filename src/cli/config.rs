//! Handlers for the `config` command group.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Template written by `config init`.
const TEMPLATE: &str = r#"# sprintrisk configuration

[simulation]
# Risks generated per sprint (1-20).
risks_per_sprint = 5
# Uncomment for reproducible sprints.
# seed = 42

[export]
# Directory that timestamped CSV exports land in.
directory = "."

[logging]
# EnvFilter syntax; RUST_LOG overrides.
level = "warn"
# "pretty" or "json".
format = "pretty"
"#;

/// Execute `config init`: write a template configuration file.
pub fn execute_init(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        }
        .into());
    }

    std::fs::write(path, TEMPLATE)?;

    output::success("Wrote configuration template");
    output::field("Path", path.display());
    output::hint(&format!(
        "edit it, then run {}",
        output::highlight("sprintrisk config validate")
    ));

    Ok(())
}

/// Execute `config show`: display the effective configuration.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Simulation");
    output::field("Risks per sprint", config.simulation.risks_per_sprint);
    output::field(
        "Seed",
        config
            .simulation
            .seed
            .map_or_else(|| "entropy".to_string(), |seed| seed.to_string()),
    );

    output::section("Export");
    output::field("Directory", config.export.directory.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`: load the file and report the outcome.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success("Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_and_validates() {
        let config: Config = toml::from_str(TEMPLATE).unwrap();

        assert_eq!(config.simulation.risks_per_sprint, 5);
        assert_eq!(config.logging.level, "warn");
    }
}
