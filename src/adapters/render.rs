use crate::adapters::format::{format_amount, format_date, month_name};
use crate::core::report::Report;
use crate::domain::model::Employee;
use crate::utils::error::Result;

fn employee_line(employee: &Employee) -> String {
    format!(
        " - {} | Nascimento: {} | Função: {} | Salário: {}",
        employee.name(),
        format_date(employee.birth_date()),
        employee.job_title(),
        format_amount(employee.salary())
    )
}

fn push_employees(lines: &mut Vec<String>, employees: &[Employee]) {
    lines.extend(employees.iter().map(employee_line));
}

fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("===== {} =====", title));
}

/// Console layout of the report, one section per step.
pub fn render_text(report: &Report) -> String {
    let mut lines = Vec::new();

    section(&mut lines, "3.1 Funcionários inseridos");
    push_employees(&mut lines, &report.seeded);

    section(&mut lines, &format!("3.2 Remover \"{}\"", report.remove_name));
    match &report.removed {
        Some(employee) => lines.push(format!("Removido: {}", employee.name())),
        None => lines.push(format!("{} não encontrado", report.remove_name)),
    }

    section(&mut lines, "3.3 Funcionários (formatados)");
    push_employees(&mut lines, &report.after_removal);

    let percent = report.raise_percent.normalize();
    section(&mut lines, &format!("3.4 Aumento de {}%", percent));
    push_employees(&mut lines, &report.after_raise);

    section(&mut lines, "3.5 / 3.6 Agrupar e imprimir por função");
    for (title, members) in &report.by_job_title {
        lines.push(format!("Função: {}", title));
        push_employees(&mut lines, members);
    }

    let month_names: Vec<&str> = report.birth_months.iter().map(|&m| month_name(m)).collect();
    section(
        &mut lines,
        &format!("3.8 Aniversariantes ({})", month_names.join(" e ")),
    );
    if report.birthdays.is_empty() {
        let lowered: Vec<String> = month_names.iter().map(|m| m.to_lowercase()).collect();
        lines.push(format!("Nenhum aniversariante em {}.", lowered.join("/")));
    } else {
        push_employees(&mut lines, &report.birthdays);
    }

    section(&mut lines, "3.9 Funcionário mais velho");
    if let Some(oldest) = &report.oldest {
        lines.push(format!("Nome: {} | Idade: {}", oldest.name, oldest.age));
    }

    section(&mut lines, "3.10 Lista por ordem alfabética");
    push_employees(&mut lines, &report.sorted_by_name);

    section(
        &mut lines,
        &format!("3.11 Total dos salários (após +{}%)", percent),
    );
    lines.push(format!("Total: {}", format_amount(report.total_salaries)));

    section(
        &mut lines,
        &format!(
            "3.12 Salários mínimos (R$ {}) por funcionário",
            format_amount(report.minimum_wage)
        ),
    );
    for entry in &report.minimum_wage_multiples {
        lines.push(format!(
            " - {}: {} salários mínimos",
            entry.name,
            format_amount(entry.multiple)
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
