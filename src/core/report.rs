use crate::core::service;
use crate::core::ConfigProvider;
use crate::domain::model::Employee;
use crate::utils::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OldestEntry {
    pub name: String,
    pub birth_date: NaiveDate,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WageMultiple {
    pub name: String,
    pub multiple: Decimal,
}

/// Snapshot of every section of one report run, in the order they are printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub seeded: Vec<Employee>,
    pub remove_name: String,
    pub removed: Option<Employee>,
    pub after_removal: Vec<Employee>,
    pub raise_percent: Decimal,
    pub after_raise: Vec<Employee>,
    /// Keyed alphabetically by job title.
    pub by_job_title: BTreeMap<String, Vec<Employee>>,
    pub birth_months: Vec<u32>,
    pub birthdays: Vec<Employee>,
    pub reference_date: NaiveDate,
    pub oldest: Option<OldestEntry>,
    pub sorted_by_name: Vec<Employee>,
    pub total_salaries: Decimal,
    pub minimum_wage: Decimal,
    pub minimum_wage_multiples: Vec<WageMultiple>,
}

fn owned(view: Vec<&Employee>) -> Vec<Employee> {
    view.into_iter().cloned().collect()
}

pub struct ReportEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ReportEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Report> {
        tracing::info!("Starting staff report");

        let mut employees = service::seed_employees();
        let seeded = employees.clone();
        tracing::info!("Seeded {} employees", seeded.len());

        let remove_name = self.config.remove_name().to_string();
        let removed = service::remove_by_name(&mut employees, &remove_name);
        match &removed {
            Some(employee) => tracing::info!("Removed '{}'", employee.name()),
            None => tracing::warn!("'{}' not found, nothing removed", remove_name),
        }
        let after_removal = employees.clone();

        let raise = self.config.raise_percent();
        service::apply_raise(&mut employees, raise)?;
        let raise_percent = raise.unwrap_or_default();
        tracing::info!("Applied {}% raise", raise_percent);
        let after_raise = employees.clone();

        let by_job_title: BTreeMap<String, Vec<Employee>> = service::group_by_job_title(&employees)
            .into_iter()
            .map(|(title, members)| (title.to_string(), owned(members)))
            .collect();
        tracing::info!("Grouped employees into {} job titles", by_job_title.len());

        let birth_months = self.config.birth_months().to_vec();
        let month_set: HashSet<u32> = birth_months.iter().copied().collect();
        let birthdays = owned(service::filter_by_birth_months(&employees, &month_set));
        tracing::info!("{} birthdays in months {:?}", birthdays.len(), birth_months);

        let reference_date = self
            .config
            .reference_date()
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let oldest = service::oldest_employee(&employees).map(|employee| OldestEntry {
            name: employee.name().to_string(),
            birth_date: employee.birth_date(),
            age: service::age_in_years(employee.birth_date(), reference_date),
        });
        if let Some(entry) = &oldest {
            tracing::info!("Oldest employee is {} ({} years)", entry.name, entry.age);
        }

        let sorted_by_name = owned(service::sort_by_name(&employees));

        let total_salaries = service::total_salaries(&employees)?;
        tracing::info!("Total salaries: {}", total_salaries);

        let minimum_wage = self.config.minimum_wage();
        let minimum_wage_multiples = employees
            .iter()
            .map(|employee| {
                Ok(WageMultiple {
                    name: employee.name().to_string(),
                    multiple: service::minimum_wage_multiple(employee, minimum_wage)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Staff report finished");

        Ok(Report {
            seeded,
            remove_name,
            removed,
            after_removal,
            raise_percent,
            after_raise,
            by_job_title,
            birth_months,
            birthdays,
            reference_date,
            oldest,
            sorted_by_name,
            total_salaries,
            minimum_wage,
            minimum_wage_multiples,
        })
    }
}
