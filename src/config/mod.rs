//! Configuration loading for the schedule pay engine.
//!
//! This module loads the runtime configuration from a YAML file: the
//! currency label, the batch policy for invalid lines, the output format
//! and the HTTP bind address.
//!
//! # Example
//!
//! ```no_run
//! use schedule_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Currency: {}", config.currency());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, InvalidLinePolicy, OutputFormat};
