use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{
    validate_months, validate_non_empty_string, validate_percentage, validate_positive_amount,
    validate_required_field, Validate,
};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub remove_name: String,
    pub raise_percent: Option<Decimal>,
    #[serde(default)]
    pub birth_months: Vec<u32>,
    pub minimum_wage: Decimal,
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ReportError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MINIMUM_WAGE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn remove_name(&self) -> &str {
        &self.report.remove_name
    }

    fn raise_percent(&self) -> Option<Decimal> {
        self.report.raise_percent
    }

    fn birth_months(&self) -> &[u32] {
        &self.report.birth_months
    }

    fn minimum_wage(&self) -> Decimal {
        self.report.minimum_wage
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.report.reference_date
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.remove_name", &self.report.remove_name)?;
        let percent = validate_required_field("report.raise_percent", &self.report.raise_percent)?;
        validate_percentage("report.raise_percent", *percent)?;
        validate_months("report.birth_months", &self.report.birth_months)?;
        validate_positive_amount("report.minimum_wage", self.report.minimum_wage)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[report]
remove_name = "João"
raise_percent = 10
birth_months = [10, 12]
minimum_wage = "1212.00"
reference_date = "2025-08-19"

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.remove_name(), "João");
        assert_eq!(config.raise_percent(), Some(dec!(10)));
        assert_eq!(config.birth_months(), &[10, 12]);
        assert_eq!(config.minimum_wage(), dec!(1212.00));
        assert_eq!(config.reference_date(), NaiveDate::from_ymd_opt(2025, 8, 19));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_defaults_to_text() {
        let toml_content = r#"
[report]
remove_name = "Caio"
raise_percent = "5"
minimum_wage = "1412.00"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.birth_months().is_empty());
        assert!(config.reference_date().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STAFF_REPORT_TEST_WAGE", "1518.00");

        let toml_content = r#"
[report]
remove_name = "João"
raise_percent = 10
minimum_wage = "${STAFF_REPORT_TEST_WAGE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.minimum_wage(), dec!(1518.00));

        std::env::remove_var("STAFF_REPORT_TEST_WAGE");
    }

    #[test]
    fn test_missing_raise_fails_validation() {
        let toml_content = r#"
[report]
remove_name = "João"
minimum_wage = "1212.00"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ReportError::MissingConfigError { .. }));
    }

    #[test]
    fn test_zero_minimum_wage_fails_validation() {
        let toml_content = r#"
[report]
remove_name = "João"
raise_percent = 10
minimum_wage = "0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[report\nremove_name = 1").unwrap_err();
        assert!(matches!(err, ReportError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[report]
remove_name = "Heitor"
raise_percent = 15
birth_months = [11]
minimum_wage = "1212.00"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.remove_name(), "Heitor");
        assert_eq!(config.birth_months(), &[11]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/staff-report.toml").unwrap_err();
        assert!(matches!(err, ReportError::ConfigError { .. }));
    }
}
