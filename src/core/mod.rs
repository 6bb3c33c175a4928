pub mod report;
pub mod service;

pub use crate::domain::model::{Employee, Person};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, ReportSink};
pub use crate::utils::error::Result;
