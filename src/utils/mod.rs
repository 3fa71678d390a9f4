pub mod date_formatter;

/// Formats a cell value for display, appending the unit when one is set.
pub fn format_value(value: f64, unit: Option<&str>) -> String {
    let text = if !value.is_finite() {
        value.to_string()
    } else if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    match unit.filter(|u| !u.is_empty()) {
        Some("percent") => format!("{text}%"),
        Some(u) => format!("{text} {u}"),
        None => text,
    }
}
