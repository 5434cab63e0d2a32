//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Formats a rate as a percentage, `NaN` for failures.
pub fn format_rate(value: &f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}%", value * 100.0)
    }
}

/// Formats a plain number with fixed precision, `NaN` for failures.
pub fn format_value(value: &f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.8}")
    }
}

/// Formats a small error in scientific notation.
pub fn format_error(value: &f64) -> String {
    format!("{value:.2e}")
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(&0.0325), "3.250000%");
        assert_eq!(format_rate(&f64::NAN), "NaN");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&1.5), "1.50000000");
        assert_eq!(format_error(&0.0005), "5.00e-4");
    }
}
