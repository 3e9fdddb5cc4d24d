mod config;
pub mod constants;
mod error;

pub use config::{AppConfig, IopConfig, parse_iop_toml};
pub use error::{ConfigError, Result};
