//! Output formatting for flattened signature rows.
//!
//! Two modes:
//! - Human-readable terminal table with a colored header
//! - JSON array for machine consumption

use crate::flatten::SignatureRow;
use anyhow::Result;
use colored::Colorize;

/// Render rows as a pretty-printed JSON array.
pub fn render_json(rows: &[SignatureRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Render rows as an aligned text table in `SignatureRow::COLUMNS` order.
pub fn render_table(rows: &[SignatureRow]) -> String {
    let mut widths: Vec<usize> = SignatureRow::COLUMNS.iter().map(|c| c.len()).collect();
    let value_rows: Vec<[String; 7]> = rows.iter().map(SignatureRow::column_values).collect();

    for values in &value_rows {
        for (width, value) in widths.iter_mut().zip(values.iter()) {
            *width = (*width).max(value.len());
        }
    }

    let mut out = String::new();

    let header: Vec<String> = SignatureRow::COLUMNS
        .iter()
        .zip(widths.iter().copied())
        .map(|(column, width)| format!("{:<width$}", column.bold()))
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    for values in &value_rows {
        let line: Vec<String> = values
            .iter()
            .zip(widths.iter().copied())
            .map(|(value, width)| format!("{value:<width$}"))
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> SignatureRow {
        SignatureRow {
            name: "OSX.Sample".to_string(),
            launch_type: "com.apple.application-bundle".to_string(),
            optional: true,
            identity: "id1".to_string(),
            filetype: "public.zip-archive".to_string(),
            uses_pattern: false,
            filename: "bad.zip".to_string(),
        }
    }

    #[test]
    fn test_json_output_shape() {
        let json = render_json(&[sample_row()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "OSX.Sample");
        assert_eq!(parsed[0]["optional"], true);
        assert_eq!(parsed[0]["uses_pattern"], false);
    }

    #[test]
    fn test_table_contains_flags_and_values() {
        colored::control::set_override(false);
        let table = render_table(&[sample_row()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("launch_type"));
        assert!(lines[1].contains("OSX.Sample"));
        assert!(lines[1].contains("bad.zip"));
        // Booleans render as 1/0 in table mode.
        assert!(lines[1].contains(" 1 ") || lines[1].contains("1  "));
    }
}
