// File: crates/trend-core/src/format.rs
// Summary: Value formatters for axis and tooltip text.

/// Formats a data value for display on the axis or in the tooltip.
pub type ValueFormatter = Box<dyn Fn(f64) -> String>;

/// Shown when a value cannot be formatted (NaN or infinite input).
pub const PLACEHOLDER: &str = "\u{2013}";

/// Signed percentage with one decimal, e.g. "+2.4%".
pub fn percent() -> ValueFormatter {
    Box::new(|v| {
        if !v.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!("{:+.1}%", v)
    })
}

/// Compact currency, e.g. "$104k" or "$1.2M".
pub fn currency_compact(symbol: &'static str) -> ValueFormatter {
    Box::new(move |v| {
        if !v.is_finite() {
            return PLACEHOLDER.to_string();
        }
        let sign = if v < 0.0 { "-" } else { "" };
        let a = v.abs();
        if a >= 1_000_000.0 {
            format!("{sign}{symbol}{:.1}M", a / 1_000_000.0)
        } else if a >= 1_000.0 {
            format!("{sign}{symbol}{:.0}k", a / 1_000.0)
        } else {
            format!("{sign}{symbol}{:.0}", a)
        }
    })
}

/// Plain count, dropping the fraction when the value is whole.
pub fn count() -> ValueFormatter {
    Box::new(|v| {
        if !v.is_finite() {
            return PLACEHOLDER.to_string();
        }
        if (v - v.round()).abs() < 1e-9 {
            format!("{:.0}", v)
        } else {
            format!("{:.1}", v)
        }
    })
}
