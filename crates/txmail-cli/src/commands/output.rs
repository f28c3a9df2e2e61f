//! Output formatting shared by parse and batch.

use console::style;
use serde::Serialize;

use txmail_core::{format_amount, Field, FieldValue, TransactionRecord};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Parse outcome for one input.
#[derive(Debug, Serialize)]
pub struct ParsedMessage {
    /// Input path, or "-" for stdin.
    pub source: String,
    /// Record, or null when no institution was recognized.
    pub record: Option<TransactionRecord>,
}

const CSV_FIELDS: [Field; 7] = Field::ALL;

/// Render results in the requested format.
pub fn format_results(results: &[ParsedMessage], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => format_csv(results),
        OutputFormat::Text => Ok(format_text(results)),
    }
}

fn format_csv(results: &[ParsedMessage]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["source", "institution", "direction"];
    header.extend(CSV_FIELDS.iter().map(Field::as_str));
    header.push("subject");
    writer.write_record(&header)?;

    for result in results {
        let mut row = vec![result.source.clone()];
        match &result.record {
            Some(record) => {
                row.push(record.institution.clone());
                row.push(record.direction.to_string());
                row.extend(
                    CSV_FIELDS
                        .iter()
                        .map(|f| record.get(*f).map(FieldValue::to_string).unwrap_or_default()),
                );
                row.push(record.subject.clone().unwrap_or_default());
            }
            None => row.resize(header.len(), String::new()),
        }
        writer.write_record(&row)?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn format_text(results: &[ParsedMessage]) -> String {
    let mut out = String::new();

    for result in results {
        let Some(record) = &result.record else {
            out.push_str(&format!(
                "{} {}: no known institution\n",
                style("✗").yellow(),
                result.source
            ));
            continue;
        };

        out.push_str(&format!(
            "{} {}: {} {} ETB {}\n",
            style("✓").green(),
            result.source,
            style(&record.institution).bold(),
            record.direction,
            format_amount(record.amount())
        ));

        if let Some(subject) = &record.subject {
            out.push_str(&format!("    subject: {}\n", subject));
        }
        for (field, value) in &record.fields {
            if *field == Field::Amount {
                continue;
            }
            let shown = match value {
                FieldValue::Amount(d) => format_amount(*d),
                FieldValue::Text(s) => s.clone(),
            };
            out.push_str(&format!("    {}: {}\n", field, shown));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use txmail_core::{TemplateCatalog, TemplateParser, TransactionParser};

    fn results() -> Vec<ParsedMessage> {
        let parser = TemplateParser::new(TemplateCatalog::builtin().unwrap());
        vec![
            ParsedMessage {
                source: "a.txt".to_string(),
                record: parser
                    .parse("You have transferred ETB 1,500.00 id=AB12XY Ref No CBE7788")
                    .map(|r| r.with_subject("Debit alert")),
            },
            ParsedMessage {
                source: "b.txt".to_string(),
                record: None,
            },
        ]
    }

    #[test]
    fn test_csv_rows_have_equal_width() {
        let csv = format_results(&results(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("source,institution,direction,amount,transaction_id"));
        assert!(lines[1].starts_with("a.txt,CBE,debit,1500.00,AB12XY"));
        assert!(lines[1].ends_with("Debit alert"));
        let width = lines[0].split(',').count();
        assert_eq!(lines[2].split(',').count(), width);
    }

    #[test]
    fn test_text_summary() {
        let text = format_results(&results(), OutputFormat::Text).unwrap();
        assert!(text.contains("CBE"));
        assert!(text.contains("1,500.00"));
        assert!(text.contains("transaction_id: AB12XY"));
        assert!(text.contains("b.txt: no known institution"));
    }

    #[test]
    fn test_json_null_record() {
        let json = format_results(&results(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["record"]["institution"], "CBE");
        assert!(value[1]["record"].is_null());
    }
}
