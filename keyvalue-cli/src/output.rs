// Terminal output for keyvalue commands

use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// Encoded values longer than this are truncated unless `--verbose`.
const PREVIEW_LEN: usize = 40;

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_success(message: impl Display) {
    println!("{} {message}", "✓".green());
}

pub fn print_error(message: impl Display) {
    eprintln!("{} {message}", "✗".red());
}

pub fn print_info(message: impl Display) {
    println!("{} {message}", "ℹ".blue());
}

/// Algorithm heading, e.g. `RSAKeyValue (2048 bit)`.
pub fn print_heading(algorithm: &str, detail: Option<String>) {
    match detail {
        Some(detail) => println!("{} ({detail})", algorithm.bold()),
        None => println!("{}", algorithm.bold()),
    }
}

/// One KeyValue child: its decoded length and base64 text.
pub fn print_encoded(name: &str, len: usize, base64: &str, verbose: bool) {
    println!(
        "  {} {} {}",
        format!("{name:<12}").dimmed(),
        format!("({len} bytes)").bright_black(),
        preview(base64, verbose)
    );
}

fn preview(base64: &str, verbose: bool) -> String {
    match base64.get(..PREVIEW_LEN) {
        Some(head) if !verbose && base64.len() > PREVIEW_LEN => format!("{head}…"),
        _ => base64.to_owned(),
    }
}

/// One KeyValue child shown as a plain number.
pub fn print_number(name: &str, value: impl Display) {
    println!("  {} {value}", format!("{name:<12}").dimmed());
}
