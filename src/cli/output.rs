use crate::Conversion;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    total: usize,
    failed: usize,
    conversions: &'a [Conversion],
}

pub fn print_conversions(conversions: &[Conversion], failed: usize, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            // One converted value per line, nothing else; keeps the text
            // output pipeable.
            for conversion in conversions {
                println!("{}", conversion.output);
            }
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                total: conversions.len() + failed,
                failed,
                conversions,
            };
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: failed to serialize output: {}", e),
            }
        }
    }
}

pub fn print_invalid_input(input: &str, message: &str, colored_output: bool) {
    if colored_output {
        eprintln!("{} {}: {}", "✗".red().bold(), input.red(), message);
    } else {
        eprintln!("✗ {}: {}", input, message);
    }
}
