use crate::utils::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parameters of one report run.
pub trait ConfigProvider {
    fn remove_name(&self) -> &str;
    /// `None` is passed through to the raise step, which rejects it.
    fn raise_percent(&self) -> Option<Decimal>;
    fn birth_months(&self) -> &[u32];
    fn minimum_wage(&self) -> Decimal;
    /// Date ages are measured against; `None` means today.
    fn reference_date(&self) -> Option<NaiveDate>;
    fn output_format(&self) -> OutputFormat;
}

/// Destination for rendered report text.
pub trait ReportSink {
    fn emit(&mut self, text: &str) -> Result<()>;
}
