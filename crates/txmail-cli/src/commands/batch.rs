//! Batch command - parse many message bodies.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, error, warn};

use txmail_core::{TemplateParser, TransactionParser};

use super::load_config;
use super::output::{format_results, OutputFormat, ParsedMessage};
use super::parse::read_body;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for message body files
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Leave out files with no known institution
    #[arg(long)]
    skip_unmatched: bool,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = TemplateParser::from_config(&config)?;

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    let pb = if args.quiet {
        ProgressBar::with_draw_target(Some(files.len() as u64), ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    let mut matched = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let source = path.display().to_string();
        pb.inc(1);

        let body = match read_body(&source) {
            Ok(body) => body,
            Err(e) if args.continue_on_error => {
                error!("Failed to read {}: {}", source, e);
                failed += 1;
                continue;
            }
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };

        let record = parser.parse(&body);
        match &record {
            Some(r) => {
                matched += 1;
                debug!("{}: {}", source, r.institution);
            }
            None => {
                warn!("{}: no known institution", source);
                if args.skip_unmatched {
                    continue;
                }
            }
        }

        results.push(ParsedMessage { source, record });
    }

    pb.finish_and_clear();

    let output = format_results(&results, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
    } else {
        println!("{}", output.trim_end());
    }

    eprintln!(
        "{} Parsed {} of {} files in {:.2?}{}",
        style("ℹ").blue(),
        matched,
        files.len(),
        start.elapsed(),
        if failed > 0 {
            format!(", {} unreadable", failed)
        } else {
            String::new()
        }
    );

    Ok(())
}
