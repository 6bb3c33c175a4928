pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::console::ConsoleSink;
pub use core::report::{Report, ReportEngine};
pub use domain::model::{Employee, Person};
pub use utils::error::{ReportError, Result};
