//! dashfilters command-line entry point.

use std::process;

use anyhow::Result;
use clap::Parser;

use dashfilters::cli::{Cli, Commands, OutputFormat};
use dashfilters::config::{self, ConfigService};
use dashfilters::domain;
use dashfilters::service::FilterService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    match cli.command {
        Commands::Apply {
            output,
            filter,
            args,
        } => {
            let service = FilterService::new(&config, output)?;
            let code = service.run(&filter, &args)?;
            process::exit(code);
        }
        Commands::List => {
            let service = FilterService::new(&config, OutputFormat::Json)?;
            for line in service.describe_filters() {
                println!("{}", line);
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("dashfilters {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
