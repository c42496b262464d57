//! Formatting helpers for table and card text.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1} %")
}

pub fn format_kwh(value: f64) -> String {
    format!("{value:.1} kWh")
}
