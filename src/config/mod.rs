pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::DEFAULT_RATES;
pub use loader::ConfigLoader;
pub use types::{ConfigError, RateConfig};
