use crate::foundation::error::{MaskforgeError, MaskforgeResult};

/// Format a float sequence as a points string: `"i:(value)"` entries with
/// two decimal places, joined by `",\n"`.
///
/// The output parses back through [`parse_points`](crate::parse_points).
pub fn format_points(values: &[f64]) -> MaskforgeResult<String> {
    format_entries(values).map(|entries| entries.join(",\n"))
}

/// Format a float sequence as a flat listing: the same `"i:(value)"`
/// entries joined by `", "`.
pub fn format_list(values: &[f64]) -> MaskforgeResult<String> {
    format_entries(values).map(|entries| entries.join(", "))
}

fn format_entries(values: &[f64]) -> MaskforgeResult<Vec<String>> {
    if values.is_empty() {
        return Err(MaskforgeError::input("float array must be non-empty"));
    }
    Ok(values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{i}:({v:.2})"))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/format/points.rs"]
mod tests;
