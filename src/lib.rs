pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{router, AppState};
pub use adapters::sqlite::Database;
pub use config::toml_config::TomlConfig;
pub use crate::core::server::ApiServer;
pub use utils::error::{ApiError, Result};
