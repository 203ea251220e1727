use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{print_conversions, print_invalid_input, OutputFormat};
use recase::{convert, convert_value, CaseStyle, Config, Conversion};
use serde_json::Value;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers between case styles", long_about = None)]
struct Cli {
    /// Values to convert; read from stdin (one per line) when omitted
    #[arg(value_name = "VALUES")]
    values: Vec<String>,

    /// Target case style (camel, kebab, dot)
    #[arg(short = 't', long = "to")]
    to: Option<CaseStyle>,

    /// Parse each input as a JSON value; non-string values are rejected
    #[arg(long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are invalid
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.to, cli.json_input)?;

    // Gather inputs from arguments or stdin
    let inputs = if cli.values.is_empty() {
        read_stdin_lines()?
    } else {
        cli.values.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No input provided. Use --help for usage information.");
    }

    // Process inputs
    let mut conversions = Vec::new();
    let mut failed = 0;

    for input in &inputs {
        let result = if config.json_input {
            match serde_json::from_str::<Value>(input) {
                Ok(value) => convert_value(&value, config.style),
                Err(e) => {
                    eprintln!("Error: invalid JSON input '{}': {}", input, e);
                    failed += 1;
                    continue;
                }
            }
        } else {
            Ok(convert(input, config.style))
        };

        match result {
            Ok(output) => conversions.push(Conversion {
                input: input.clone(),
                output,
                style: config.style,
            }),
            Err(e) => {
                print_invalid_input(input, &e.to_string(), !cli.no_color);
                failed += 1;
            }
        }
    }

    print_conversions(&conversions, failed, &cli.format);

    // Exit with appropriate code
    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        lines.push(line);
    }
    Ok(lines)
}
