//! pt-BR presentation of dates and amounts.

use crate::domain::model::round_cents;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `1234567.891` → `1.234.567,89`
pub fn format_amount(value: Decimal) -> String {
    let text = round_cents(value).abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !round_cents(value).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{},{}", sign, grouped, fraction)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(1961, 5, 2).unwrap();
        assert_eq!(format_date(date), "02/05/1961");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(53696.26)), "53.696,26");
        assert_eq!(format_amount(dec!(2000)), "2.000,00");
        assert_eq!(format_amount(dec!(1212.00)), "1.212,00");
        assert_eq!(format_amount(dec!(8.12)), "8,12");
        assert_eq!(format_amount(dec!(999.995)), "1.000,00");
        assert_eq!(format_amount(dec!(1234567.891)), "1.234.567,89");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
        assert_eq!(format_amount(dec!(-1500.5)), "-1.500,50");
        assert_eq!(format_amount(dec!(-0.001)), "0,00");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(10), "Outubro");
        assert_eq!(month_name(12), "Dezembro");
        assert_eq!(month_name(13), "?");
    }
}
