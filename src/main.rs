//! Threat model generator CLI.
//!
//! Reads a component/connection definition and a threat library and writes the
//! derived threat model as YAML or JSON.

use autothreat::config::check_date;
use autothreat::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Automotive threat model generator
#[derive(Parser, Debug)]
#[command(name = "autothreat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the components definition file
    #[arg(short = 'c', long)]
    components: PathBuf,

    /// TOML file with run settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the threat library
    #[arg(short = 'l', long)]
    library: Option<PathBuf>,

    /// Name of the system
    #[arg(long)]
    system_name: Option<String>,

    /// System description
    #[arg(long)]
    description: Option<String>,

    /// Assessment date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<String>,

    /// Output file path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format, inferred from the output extension when omitted
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatArg>,
}

/// Command-line argument wrapper for OutputFormat
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_date(s: &str) -> Result<String, String> {
    check_date(s).map(|_| s.to_string())
}

impl Args {
    /// Merge command-line flags over the file (or default) configuration.
    fn to_config(&self) -> Result<Config, autothreat::Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(library) = &self.library {
            config.library = library.clone();
        }
        if let Some(name) = &self.system_name {
            config.system_name = name.clone();
        }
        if let Some(description) = &self.description {
            config.description = description.clone();
        }
        if let Some(date) = &self.date {
            config.date_assessed = Some(date.clone());
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(format) = self.format {
            config.format = Some(format.into());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let result = args
        .to_config()
        .and_then(|config| autothreat::run(&config, &args.components));

    match result {
        Ok(generated) => {
            info!(
                threats = generated.model.threats.len(),
                controls = generated.model.security_controls.len(),
                warnings = generated.warnings.len(),
                "threat model generated"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
