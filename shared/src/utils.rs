// Display formatting shared by the GUI panels and the report builder.
// Amounts render US-style ("1,234.56"), dates render as dd/mm/yyyy.

use chrono::NaiveDate;

/// Formats `value` with `decimals` fraction digits and comma-grouped
/// thousands, e.g. `600822115.84` -> `"600,822,115.84"`.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::new();
    if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// US$ amounts: two decimals, grouped thousands.
pub fn format_usd(value: f64) -> String {
    group_thousands(value, 2)
}

/// Guaraní amounts: whole numbers, grouped thousands.
pub fn format_guarani(value: f64) -> String {
    group_thousands(value, 0)
}

/// Percentages and rates: plain two decimals.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}", value)
}

/// Weights and daily gains: plain two decimals.
pub fn format_kg(value: f64) -> String {
    format!("{:.2}", value)
}

/// Calendar dates as dd/mm/yyyy.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
