use crate::utils::error::{ReportError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_positive_amount(field_name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// A raise below -100% would turn salaries negative.
pub fn validate_percentage(field_name: &str, value: Decimal) -> Result<()> {
    if value < -Decimal::ONE_HUNDRED {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Percentage cannot be lower than -100".to_string(),
        });
    }
    Ok(())
}

pub fn validate_months(field_name: &str, months: &[u32]) -> Result<()> {
    for &month in months {
        validate_range(field_name, month, 1, 12)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_months() {
        assert!(validate_months("birth_months", &[10, 12]).is_ok());
        assert!(validate_months("birth_months", &[]).is_ok());
        assert!(validate_months("birth_months", &[0]).is_err());
        assert!(validate_months("birth_months", &[1, 13]).is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount("minimum_wage", dec!(1212.00)).is_ok());
        assert!(validate_positive_amount("minimum_wage", Decimal::ZERO).is_err());
        assert!(validate_positive_amount("minimum_wage", dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("raise_percent", dec!(10)).is_ok());
        assert!(validate_percentage("raise_percent", dec!(-100)).is_ok());
        assert!(validate_percentage("raise_percent", dec!(-100.01)).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(dec!(10));
        assert_eq!(*validate_required_field("raise_percent", &present).unwrap(), dec!(10));

        let absent: Option<Decimal> = None;
        let err = validate_required_field("raise_percent", &absent).unwrap_err();
        assert!(matches!(err, ReportError::MissingConfigError { .. }));
    }
}
