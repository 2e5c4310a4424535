//! Month picker rendering

use crate::models::MonthDescriptor;

/// One line per month, with the selected month marked
pub fn format_month_list(months: &[MonthDescriptor], selected: usize) -> String {
    let mut output = String::new();
    for month in months {
        let marker = if month.id == selected { ">" } else { " " };
        output.push_str(&format!(
            "{} {:>3}  {}  {}\n",
            marker,
            month.id,
            month.date.format("%Y-%m"),
            month
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use crate::services::generate_months;
    use chrono::NaiveDate;

    #[test]
    fn test_marks_selected() {
        let months = generate_months(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Language::Portuguese,
        )
        .unwrap();
        let output = format_month_list(&months, 1);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('>'));
        assert!(lines[1].contains("2024-02"));
        assert!(lines[1].contains("fevereiro 2024"));
    }
}
