pub mod billing;
pub mod cli;
pub mod config;
pub mod error;

pub use billing::{Bill, FeeEngine, Pack, PackKind, StayInterval};
pub use config::{ConfigLoader, RateConfig};
pub use error::{FeeError, FeeResult};
