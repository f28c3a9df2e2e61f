//! Transaction extraction: classification, field patterns, normalization.

mod amounts;
mod classifier;
mod direction;
mod fields;
mod parser;
pub mod patterns;

pub use amounts::{format_amount, normalize_amount};
pub use classifier::{Classification, Classifier};
pub use direction::detect_direction;
pub use fields::{FieldExtractor, RawFields};
pub use parser::TemplateParser;

use crate::models::transaction::TransactionRecord;

/// Trait for notification parsers.
pub trait TransactionParser {
    /// Parse a decoded message body. `None` when no institution is recognized.
    fn parse(&self, text: &str) -> Option<TransactionRecord>;
}

/// A field value together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the pattern that matched within the field's list.
    pub pattern_index: usize,
    /// Byte span of the whole match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, pattern_index: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            pattern_index,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
