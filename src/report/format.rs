//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the parsing/scale code stays clean and testable
//! - output changes are localized (the tests below pin the exact layout)

use crate::app::pipeline::AverageDetails;
use crate::error::AppError;
use crate::rank::Scale;

/// Format the full run report.
pub fn format_report(details: &AverageDetails) -> String {
    let mut out = String::new();

    out.push_str("Нормализованные звания (RU):\n");
    out.push_str(&format!("  {}\n", details.labels.join(", ")));
    out.push_str("Числовые значения:\n");
    out.push_str(&format!("  {}\n", fmt_values(&details.values)));
    out.push_str(&format!("Среднее по шкале: {:.2}\n", details.average));
    out.push_str(&format!("Итоговое звание: {}", details.final_label));
    if !details.include_radiant {
        out.push_str("\n(Примечание: Radiant отключен, трактуется как Immortal 3.)");
    }

    out
}

/// Serialize the run as pretty JSON.
pub fn format_report_json(details: &AverageDetails) -> Result<String, AppError> {
    serde_json::to_string_pretty(details)
        .map_err(|e| AppError::new(4, format!("Failed to serialize report: {e}")))
}

/// Format every scale position with its Russian and English labels.
pub fn format_scale_table(scale: Scale) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>3} {:<14} {:<12}", "#", "ранг", "rank").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<3} {:-<14} {:-<12}", "", "", "").trim_end());
    out.push('\n');

    for (position, rank) in scale.entries() {
        out.push_str(
            format!("{:>3} {:<14} {:<12}", position, rank.label(), rank.english_label()).trim_end(),
        );
        out.push('\n');
    }

    if !scale.include_radiant {
        out.push_str("(Radiant отключен: трактуется как Immortal 3 = 24.)\n");
    }

    out
}

/// Comma-separated scale positions.
pub(crate) fn fmt_values(values: &[u32]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::pipeline::compute_average_details;

    #[test]
    fn values_are_comma_separated() {
        assert_eq!(fmt_values(&[16, 19, 4, 7, 10]), "16, 19, 4, 7, 10");
        assert_eq!(fmt_values(&[]), "");
    }

    #[test]
    fn text_report_layout() {
        let details = compute_average_details(&["д1", "аск1", "б1", "с1", "г1"], true).unwrap();
        let expected = "\
Нормализованные звания (RU):
  Алмаз 1, Асцендант 1, Бронза 1, Серебро 1, Золото 1
Числовые значения:
  16, 19, 4, 7, 10
Среднее по шкале: 11.20
Итоговое звание: Золото 2";
        assert_eq!(format_report(&details), expected);
    }

    #[test]
    fn text_report_notes_excluded_radiant() {
        let details =
            compute_average_details(&["radiant", "и3", "и3", "и3", "и3"], false).unwrap();
        let report = format_report(&details);
        assert!(report.contains("  24, 24, 24, 24, 24\n"));
        assert!(report.contains("Среднее по шкале: 24.00\n"));
        assert!(report.ends_with("(Примечание: Radiant отключен, трактуется как Immortal 3.)"));
    }

    #[test]
    fn json_report_fields() {
        let details = compute_average_details(&["д1", "аск1", "б1", "с1", "г1"], true).unwrap();
        let json = format_report_json(&details).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_label"], "Золото 2");
        assert_eq!(value["values"], serde_json::json!([16, 19, 4, 7, 10]));
        assert_eq!(value["final_rank"]["family"], "gold");
        assert_eq!(value["final_rank"]["tier"], 2);
        assert_eq!(value["include_radiant"], true);
    }

    #[test]
    fn scale_table_rows() {
        let table = format_scale_table(Scale::new(true));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 25);
        assert_eq!(lines[2], "  1 Железо 1       Iron 1");
        assert_eq!(lines[26], " 25 Радиант        Radiant");

        let table = format_scale_table(Scale::new(false));
        assert!(!table.contains("Радиант"));
        assert!(table.contains(" 24 Иммортал 3"));
    }
}
