//! Business rules over an employee collection.
//!
//! `remove_by_name` and `apply_raise` mutate the caller's collection. Every
//! other operation borrows it and returns a derived view.

use crate::domain::model::{Employee, CENT_SCALE};
use crate::utils::error::{ReportError, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Builds the fixed ten-employee fleet every report starts from.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new("Maria", date(2000, 10, 18), Decimal::new(200000, 2), "Operador"),
        Employee::new("João", date(1990, 5, 12), Decimal::new(228400, 2), "Operador"),
        Employee::new("Caio", date(1961, 5, 2), Decimal::new(983600, 2), "Coordenador"),
        Employee::new("Miguel", date(1988, 10, 14), Decimal::new(1911900, 2), "Diretor"),
        Employee::new("Alice", date(1995, 1, 5), Decimal::new(223400, 2), "Recepcionista"),
        Employee::new("Heitor", date(1999, 11, 19), Decimal::new(158272, 2), "Gerente"),
        Employee::new("Arthur", date(1993, 3, 31), Decimal::new(407184, 2), "Diretor"),
        Employee::new("Laura", date(1994, 7, 8), Decimal::new(301745, 2), "Gerente"),
        Employee::new("Heloísa", date(2003, 12, 24), Decimal::new(141289, 2), "Eletricista"),
        Employee::new("Helena", date(1999, 10, 2), Decimal::new(325688, 2), "Estagiário"),
    ]
}

/// Folds through upper case first so every sigma form compares equal.
fn fold_case(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold_case(a).eq(fold_case(b))
}

fn pow10(exponent: u32) -> Option<i128> {
    10i128.checked_pow(exponent)
}

/// `numerator / denominator` as cents, ties away from zero. The division is
/// done on exact integers so there is only one rounding step.
fn cents_half_up(numerator: i128, denominator: i128) -> Option<Decimal> {
    if denominator <= 0 {
        return None;
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let rounded = if remainder.unsigned_abs() * 2 >= denominator.unsigned_abs() {
        quotient + numerator.signum()
    } else {
        quotient
    };
    Decimal::try_from_i128_with_scale(rounded, CENT_SCALE).ok()
}

/// Removes the first employee whose name matches `name` ignoring case.
/// A miss leaves the collection untouched.
pub fn remove_by_name(employees: &mut Vec<Employee>, name: &str) -> Option<Employee> {
    let index = employees
        .iter()
        .position(|employee| eq_ignore_case(employee.name(), name));

    match index {
        Some(index) => {
            let removed = employees.remove(index);
            tracing::debug!("Removed employee '{}' at position {}", removed.name(), index);
            Some(removed)
        }
        None => {
            tracing::debug!("No employee named '{}' to remove", name);
            None
        }
    }
}

/// Multiplies every salary by `1 + percent / 100`, rounding half-up to cents.
///
/// New salaries are all computed before any is written, so a rejected
/// percentage or an overflow leaves the collection as it was.
pub fn apply_raise(employees: &mut [Employee], percent: Option<Decimal>) -> Result<()> {
    let percent = percent
        .ok_or_else(|| ReportError::invalid_argument("percent", "percentage must not be absent"))?;
    if percent < -Decimal::ONE_HUNDRED {
        return Err(ReportError::invalid_argument(
            "percent",
            format!("{}% would make salaries negative", percent),
        ));
    }

    // factor = (10^fs + mantissa) / 10^fs
    let factor_scale = percent.scale() + 2;
    let factor = pow10(factor_scale)
        .and_then(|unit| unit.checked_add(percent.mantissa()))
        .ok_or_else(|| ReportError::ProcessingError {
            message: format!("{}% has too many digits", percent),
        })?;

    let raised = employees
        .iter()
        .map(|employee| {
            let salary = employee.salary();
            let product = salary.mantissa().checked_mul(factor);
            let divisor = pow10(salary.scale() + factor_scale - CENT_SCALE);
            product
                .zip(divisor)
                .and_then(|(product, divisor)| cents_half_up(product, divisor))
                .ok_or_else(|| ReportError::ProcessingError {
                    message: format!("salary of '{}' overflowed during raise", employee.name()),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    for (employee, salary) in employees.iter_mut().zip(raised) {
        employee.set_salary(salary);
    }

    tracing::debug!("Applied {}% raise to {} employees", percent, employees.len());
    Ok(())
}

/// Groups employees by job title. Members keep their source order; key
/// order is unspecified.
pub fn group_by_job_title(employees: &[Employee]) -> HashMap<&str, Vec<&Employee>> {
    let mut groups: HashMap<&str, Vec<&Employee>> = HashMap::new();
    for employee in employees {
        groups.entry(employee.job_title()).or_default().push(employee);
    }
    groups
}

/// Employees born in any of `months` (1-12), in source order. An empty set
/// selects nobody.
pub fn filter_by_birth_months<'a>(
    employees: &'a [Employee],
    months: &HashSet<u32>,
) -> Vec<&'a Employee> {
    if months.is_empty() {
        return Vec::new();
    }
    employees
        .iter()
        .filter(|employee| months.contains(&employee.birth_date().month()))
        .collect()
}

/// Earliest birth date wins; ties go to the first in collection order.
pub fn oldest_employee(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().min_by_key(|employee| employee.birth_date())
}

/// Whole years elapsed from `birth` to `reference`.
///
/// A reference date before the birth date yields the negated age counted
/// the other way round.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> i32 {
    if reference < birth {
        return -age_in_years(reference, birth);
    }
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Stable sort by name in code point order.
pub fn sort_by_name(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}

pub fn total_salaries(employees: &[Employee]) -> Result<Decimal> {
    employees.iter().try_fold(Decimal::ZERO, |total, employee| {
        total
            .checked_add(employee.salary())
            .ok_or_else(|| ReportError::ProcessingError {
                message: format!("salary total overflowed at '{}'", employee.name()),
            })
    })
}

/// How many minimum wages `employee` earns, rounded half-up to cents.
pub fn minimum_wage_multiple(employee: &Employee, minimum_wage: Decimal) -> Result<Decimal> {
    if minimum_wage <= Decimal::ZERO {
        return Err(ReportError::invalid_argument(
            "minimum_wage",
            format!("must be greater than zero, got {}", minimum_wage),
        ));
    }
    // (a * 10^-sa) / (b * 10^-sb) * 100 = a * 10^(sb + 2) / (b * 10^sa)
    let salary = employee.salary();
    let numerator = pow10(minimum_wage.scale() + CENT_SCALE)
        .and_then(|shift| salary.mantissa().checked_mul(shift));
    let denominator =
        pow10(salary.scale()).and_then(|shift| minimum_wage.mantissa().checked_mul(shift));
    numerator
        .zip(denominator)
        .and_then(|(numerator, denominator)| cents_half_up(numerator, denominator))
        .ok_or_else(|| ReportError::ProcessingError {
            message: format!("dividing the salary of '{}' overflowed", employee.name()),
        })
}
