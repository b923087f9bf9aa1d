//! Configuration: API location and input limits.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, InputConfig};
