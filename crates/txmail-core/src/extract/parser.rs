//! Template-driven transaction parser.

use tracing::{debug, info};

use crate::catalog::{self, TemplateCatalog};
use crate::models::config::{DEFAULT_EXCERPT_LEN, TxmailConfig};
use crate::models::transaction::{FieldValue, TransactionRecord};

use super::amounts::normalize_amount;
use super::classifier::{Classification, Classifier};
use super::direction::detect_direction;
use super::fields::FieldExtractor;
use super::TransactionParser;

/// Parser that classifies text against a catalog and applies the matched template.
#[derive(Debug, Clone)]
pub struct TemplateParser {
    catalog: TemplateCatalog,
    extractor: FieldExtractor,
    /// Characters of input kept on each record.
    excerpt_len: usize,
}

impl TemplateParser {
    /// Create a parser over an explicit catalog with default settings.
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            extractor: FieldExtractor::new(),
            excerpt_len: DEFAULT_EXCERPT_LEN,
        }
    }

    /// Build the catalog and settings from configuration.
    pub fn from_config(config: &TxmailConfig) -> catalog::Result<Self> {
        let catalog = TemplateCatalog::from_config(config)?;
        info!(
            "Parser ready with {} templates, excerpt length {}",
            catalog.len(),
            config.extraction.excerpt_len
        );
        Ok(Self::new(catalog).with_excerpt_len(config.extraction.excerpt_len))
    }

    /// Set excerpt length.
    pub fn with_excerpt_len(mut self, excerpt_len: usize) -> Self {
        self.excerpt_len = excerpt_len;
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Classify without extracting.
    pub fn classify(&self, text: &str) -> Classification<'_> {
        Classifier::new(&self.catalog).classify(text)
    }

    fn excerpt(&self, text: &str) -> String {
        text.chars().take(self.excerpt_len).collect()
    }
}

impl TransactionParser for TemplateParser {
    fn parse(&self, text: &str) -> Option<TransactionRecord> {
        let template = self.classify(text).template()?;

        let fields = self
            .extractor
            .extract(template, text)
            .into_iter()
            .filter_map(|(field, raw)| {
                if field.is_numeric() {
                    Some((field, FieldValue::Amount(normalize_amount(raw.as_deref()))))
                } else {
                    raw.map(|value| (field, FieldValue::Text(value)))
                }
            })
            .collect();

        let record = TransactionRecord {
            institution: template.name().to_string(),
            direction: detect_direction(text),
            fields,
            raw_excerpt: self.excerpt(text),
            subject: None,
        };

        debug!(
            "Parsed {} {} of {}",
            record.institution,
            record.direction,
            record.amount()
        );

        Some(record)
    }
}
