use clap::Parser;

use sprintrisk::cli::output::{self, OutputConfig};
use sprintrisk::cli::{self, CheckCommand, Cli, Commands, ConfigCommand};
use sprintrisk::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(error) = run(&cli) {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Simulate(args) => cli::simulate::execute(args),
        Commands::Export(args) => cli::export::execute(args),
        Commands::Catalog => cli::catalog::execute(),
        Commands::Check(CheckCommand::Engine(args)) => cli::check::execute_engine(args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(&args.config),
        Commands::Config(ConfigCommand::Init(args)) => cli::config::execute_init(&args.config),
        Commands::Config(ConfigCommand::Show(args)) => cli::config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => {
            cli::config::execute_validate(&args.config)
        }
    }
}
