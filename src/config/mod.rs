pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, logger, validation};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nz-walks")]
#[command(about = "HTTP API for New Zealand regions and walks")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind_address: String,

    #[arg(long, default_value = "sqlite://nzwalks.db")]
    pub database_url: String,

    #[arg(long, default_value = "5")]
    pub max_connections: u32,

    /// Path to a TOML configuration file; replaces the flags above when given
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn database_url(&self) -> &str {
        &self.database_url
    }

    fn max_connections(&self) -> u32 {
        self.max_connections
    }

    fn log_level(&self) -> &str {
        logger::level_for(self.verbose)
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind_address", &self.bind_address)?;
        validation::validate_database_url("database_url", &self.database_url)?;
        validation::validate_positive_number("max_connections", self.max_connections, 1)?;
        Ok(())
    }
}
