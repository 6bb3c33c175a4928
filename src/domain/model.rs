use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits every salary carries.
pub const CENT_SCALE: u32 = 2;

/// Rounds to two decimal places, ties away from zero, and pads the scale to
/// exactly two digits so `2200` is stored as `2200.00`.
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CENT_SCALE);
    rounded
}

/// Identity data shared by every person-like record. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    birth_date: NaiveDate,
}

impl Person {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    salary: Decimal,
    job_title: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        salary: Decimal,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, birth_date),
            salary: round_cents(salary),
            job_title: job_title.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.person.birth_date()
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Stores the amount at cent precision. Raise math lives in
    /// `core::service::apply_raise`; this does no validation of its own.
    pub fn set_salary(&mut self, salary: Decimal) {
        self.salary = round_cents(salary);
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn set_job_title(&mut self, job_title: impl Into<String>) {
        self.job_title = job_title.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(dec!(3319.195)), dec!(3319.20));
        assert_eq!(round_cents(dec!(1740.992)), dec!(1740.99));
        assert_eq!(round_cents(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round_cents(dec!(2200)).to_string(), "2200.00");
    }

    #[test]
    fn test_employee_exposes_person_fields() {
        let employee = Employee::new("Caio", date(1961, 5, 2), dec!(9836), "Coordenador");
        assert_eq!(employee.name(), "Caio");
        assert_eq!(employee.birth_date(), date(1961, 5, 2));
        assert_eq!(employee.person().name(), "Caio");
        assert_eq!(employee.salary().to_string(), "9836.00");
        assert_eq!(employee.job_title(), "Coordenador");
    }

    #[test]
    fn test_set_salary_keeps_cent_precision() {
        let mut employee = Employee::new("Laura", date(1994, 7, 8), dec!(3017.45), "Gerente");
        employee.set_salary(dec!(3319.1950));
        assert_eq!(employee.salary(), dec!(3319.20));
        assert_eq!(employee.salary().scale(), CENT_SCALE);
    }

    #[test]
    fn test_set_job_title() {
        let mut employee = Employee::new("Alice", date(1995, 1, 5), dec!(2234.00), "Recepcionista");
        employee.set_job_title("Gerente");
        assert_eq!(employee.job_title(), "Gerente");
    }

    #[test]
    fn test_employee_serializes_flat() {
        let employee = Employee::new("Maria", date(2000, 10, 18), dec!(2000.00), "Operador");
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["name"], "Maria");
        assert_eq!(json["birth_date"], "2000-10-18");
        assert_eq!(json["salary"], "2000.00");
        assert_eq!(json["job_title"], "Operador");
    }
}
