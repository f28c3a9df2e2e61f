//! Parse command - extract a transaction from a single message body.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use txmail_core::{TemplateParser, TransactionParser};

use super::load_config;
use super::output::{format_results, OutputFormat, ParsedMessage};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Decoded plain-text message body, or "-" for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Subject line to attach to the record
    #[arg(short, long)]
    subject: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = TemplateParser::from_config(&config)?;

    let body = read_body(&args.input)?;
    info!("Parsing {} ({} bytes)", args.input, body.len());

    let record = parser.parse(&body).map(|record| match &args.subject {
        Some(subject) => record.with_subject(subject.clone()),
        None => record,
    });

    let output = match args.format {
        // A single input prints the bare record (or null) rather than a list
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        format => format_results(
            &[ParsedMessage {
                source: args.input.clone(),
                record,
            }],
            format,
        )?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub(super) fn read_body(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        return Ok(body);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    // Bodies are expected to be decoded already; tolerate stray invalid bytes
    let bytes = fs::read(&path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
