//! Canonical number rendering for attribute values.
//!
//! Every numeric attribute in the emitted document goes through [`format_number`], so
//! two runs with identical inputs produce byte-identical markup.

/// Render `value` with at most two fractional digits and no trailing zeros.
///
/// `5.0` becomes `"5"`, `0.30` becomes `"0.3"`, `1.456` becomes `"1.46"`. The sign
/// survives rounding, so `-0.001` renders as `"-0"`.
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.2}");
    match text.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => text.trim_end_matches('0').trim_end_matches('.').to_string(),
    }
}

/// Seconds value as used by `dur`/`begin` attributes.
pub fn format_secs(value: f64) -> String {
    format!("{}s", format_number(value))
}

/// Semicolon separated scalar keyframes.
pub fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(";")
}

/// Semicolon separated `x,y` keyframes.
pub fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", format_number(*x), format_number(*y)))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
