// src/commands/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::app_config::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "flight_booker", about = "Book the cheapest free seat on a route")]
pub struct Cli {
    /// Configuration file (toml, json or yaml); missing files are ignored
    #[arg(long, short)]
    pub config: Option<String>,

    /// Flight source file to load; repeat to load several. Overrides the configured list
    #[arg(long = "source", short = 's', value_name = "FILE")]
    pub sources: Vec<PathBuf>,
}

impl Cli {
    pub fn app_config(&self) -> Result<AppConfig, config::ConfigError> {
        let config = AppConfig::new(self.config.as_deref())?;
        Ok(config.with_source_files(self.sources.clone()))
    }
}
