use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_months, validate_non_empty_string, validate_percentage, validate_positive_amount,
    Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "staff-report")]
#[command(about = "Employee roster report: removal, raise, grouping and salary summaries")]
pub struct CliConfig {
    /// Employee removed before the raise (case-insensitive)
    #[arg(long, default_value = "João")]
    pub remove_name: String,

    /// Percentage raise applied to every salary
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub raise_percent: Decimal,

    /// Birth months (1-12) listed in the birthday section
    #[arg(long, value_delimiter = ',', default_value = "10,12")]
    pub birth_months: Vec<u32>,

    /// Minimum wage used as divisor for the salary multiples
    #[arg(long, default_value = "1212.00")]
    pub minimum_wage: Decimal,

    /// Date ages are computed at (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Load report parameters from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn remove_name(&self) -> &str {
        &self.remove_name
    }

    fn raise_percent(&self) -> Option<Decimal> {
        Some(self.raise_percent)
    }

    fn birth_months(&self) -> &[u32] {
        &self.birth_months
    }

    fn minimum_wage(&self) -> Decimal {
        self.minimum_wage
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("remove_name", &self.remove_name)?;
        validate_percentage("raise_percent", self.raise_percent)?;
        validate_months("birth_months", &self.birth_months)?;
        validate_positive_amount("minimum_wage", self.minimum_wage)?;
        Ok(())
    }
}
