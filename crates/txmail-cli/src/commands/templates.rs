//! Templates command - show the active template catalog.

use clap::Args;
use console::style;

use txmail_core::{Template, TemplateCatalog, TemplateDef};

use super::load_config;

/// Arguments for the templates command.
#[derive(Args)]
pub struct TemplatesArgs {
    /// Print template definitions as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TemplatesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let catalog = TemplateCatalog::from_config(&config)?;

    if args.json {
        let defs: Vec<TemplateDef> = catalog.iter().map(Template::to_def).collect();
        println!("{}", serde_json::to_string_pretty(&defs)?);
        return Ok(());
    }

    for (i, template) in catalog.iter().enumerate() {
        println!(
            "{}. {}  {}",
            i + 1,
            style(template.name()).bold(),
            style(template.identifiers().join(" | ")).dim()
        );
        for (field, patterns) in template.fields() {
            println!("     {:<15} {} pattern(s)", field.as_str(), patterns.len());
        }
    }

    Ok(())
}
