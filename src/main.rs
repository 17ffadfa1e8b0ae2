mod config;
mod console;
mod error;
mod median;
mod parse;
mod report;
mod sort;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::MedianConfiguration, report::OutputFormat};

fn init_logs() {
    // Reports go to stdout, so logs are kept on stderr.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("could not install log subscriber");
    }
}

fn main() -> Result<()> {
    init_logs();

    let arg_conf = ArgConfiguration::parse();
    let mut configuration = arg_conf
        .config_file
        .as_deref()
        .map(MedianConfiguration::load)
        .transpose()?
        .unwrap_or_default();

    // Override configuration with command line arguments if provided
    if arg_conf.json {
        configuration.output = OutputFormat::Json;
    }
    info!(?configuration, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut stdin.lock(), &mut stdout.lock(), &configuration)
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ArgConfiguration {
    /// Configuration file path (if none defaults will be assumed)
    #[clap(short, long, value_parser)]
    pub config_file: Option<PathBuf>,
    /// Print reports as JSON lines (overrides output from config file)
    #[clap(short, long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arg_configuration_test() {
        ArgConfiguration::command().debug_assert();

        let args = ArgConfiguration::parse_from(["median-finder", "-c", "cases.toml", "--json"]);
        assert_eq!(args.config_file, Some(PathBuf::from("cases.toml")));
        assert!(args.json);

        let args = ArgConfiguration::parse_from(["median-finder"]);
        assert!(args.config_file.is_none());
        assert!(!args.json);
    }
}
